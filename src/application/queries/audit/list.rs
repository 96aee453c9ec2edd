use super::{AuditQueryService, service::normalize_limit};
use crate::{
    application::{
        dto::{AuditLogDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::audit::AuditLogCursor,
};

#[derive(Debug, Default)]
pub struct ListAuditTrailQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    /// The caller's own audit entries, newest first.
    pub async fn list_trail(
        &self,
        identity: &dyn IdentityProvider,
        query: ListAuditTrailQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        let actor = require_owner(identity).await?;
        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()
            .map_err(|_| ApplicationError::validation("cursor", "invalid cursor token"))?;

        let (items, next_cursor) = self.repo.list_for_actor(actor, limit, cursor).await?;
        let dtos: Vec<_> = items.into_iter().map(Into::<AuditLogDto>::into).collect();
        Ok(CursorPage::new(dtos, next_cursor))
    }
}
