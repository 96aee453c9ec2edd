// src/application/queries/users.rs
use crate::{
    application::{
        dto::UserProfileDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::user::UserRepository,
};
use std::sync::Arc;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// A token for a user that no longer exists counts as signed out.
    pub async fn me(&self, identity: &dyn IdentityProvider) -> ApplicationResult<UserProfileDto> {
        let id = require_owner(identity).await?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::Unauthenticated)?;
        Ok(user.into())
    }
}
