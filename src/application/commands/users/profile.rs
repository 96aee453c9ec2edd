use super::UserCommandService;
use crate::{
    application::{
        dto::UserProfileDto,
        error::{ApplicationError, ApplicationResult},
        ports::{
            identity::{IdentityProvider, require_owner},
            views::RouteScope,
        },
    },
    domain::{
        errors::DomainError,
        user::{FullName, ProfileUpdate},
    },
};

pub struct UpdateProfileCommand {
    pub full_name: String,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        identity: &dyn IdentityProvider,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserProfileDto> {
        let user_id = require_owner(identity).await?;
        let full_name = FullName::new(command.full_name).map_err(|err| match err {
            DomainError::Validation(msg) => ApplicationError::validation("full_name", msg),
            other => other.into(),
        })?;

        let updated = self
            .user_repo
            .update_profile(ProfileUpdate {
                id: user_id,
                full_name,
                updated_at: self.clock.now(),
            })
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to update profile", err))?;
        tracing::info!(%user_id, "profile updated");

        self.effects.invalidate(&[RouteScope::Account]);
        Ok(updated.into())
    }
}
