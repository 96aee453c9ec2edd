// src/application/ports/identity.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Resolves who is performing the current operation.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Option<AuthenticatedUser>;
}

/// Per-request identity context. Built once from the request credentials and
/// passed explicitly to every service call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[async_trait]
impl IdentityProvider for Session {
    async fn current_user(&self) -> Option<AuthenticatedUser> {
        self.user.clone()
    }
}

/// Resolves the identity or fails with `Unauthenticated`.
pub async fn require_user(identity: &dyn IdentityProvider) -> ApplicationResult<AuthenticatedUser> {
    identity
        .current_user()
        .await
        .ok_or(ApplicationError::Unauthenticated)
}

pub async fn require_owner(identity: &dyn IdentityProvider) -> ApplicationResult<UserId> {
    require_user(identity).await.map(|user| user.id)
}
