use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};
use uuid::Uuid;

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserProfileDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
            session_id: Some(Uuid::new_v4().to_string()),
        };
        let token = self.token_manager.issue(subject).await?;
        tracing::info!(user_id = %user.id, "user signed in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(&self, email: &str, password: &str) -> ApplicationResult<User> {
        // Malformed and unknown emails fail the same way as a wrong password.
        let email = Email::new(email).map_err(|_| ApplicationError::Unauthenticated)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(ApplicationError::Unauthenticated)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
