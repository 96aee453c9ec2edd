use crate::domain::audit::{
    cursor::AuditLogCursor,
    entity::{AuditLog, NewAuditLog},
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<()>;

    /// Entries recorded by `actor`, newest first. The second element is the
    /// encoded cursor of the next page when one exists.
    async fn list_for_actor(
        &self,
        actor: UserId,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<String>)>;
}
