use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, FullName, NewUser, PasswordHash},
        validation::FieldErrors,
    },
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserProfileDto> {
        let (email, full_name) = Self::check_registration(&command)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .user_repo
            .insert(NewUser {
                email,
                full_name,
                password_hash,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }

    /// Collects every field problem at once so the form can show them together.
    fn check_registration(command: &RegisterUserCommand) -> ApplicationResult<(Email, FullName)> {
        let mut errors = FieldErrors::new();

        let email = Email::new(command.email.as_str())
            .map_err(|err| errors.insert("email", reason(err)))
            .ok();
        if let Err(ApplicationError::ValidationFailed(fields)) = validate_password(&command.password) {
            for (field, message) in fields.iter() {
                errors.insert(field, message);
            }
        }
        let full_name = FullName::new(command.full_name.as_str())
            .map_err(|err| errors.insert("full_name", reason(err)))
            .ok();

        match (email, full_name) {
            (Some(email), Some(full_name)) if errors.is_empty() => Ok((email, full_name)),
            _ => Err(ApplicationError::ValidationFailed(errors)),
        }
    }
}

fn reason(err: DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg,
        other => other.to_string(),
    }
}
