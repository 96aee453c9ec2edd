use super::AuditQueryService;
use crate::application::{
    dto::AuditStatusDto,
    error::ApplicationResult,
    ports::identity::{IdentityProvider, require_owner},
};

const POLICY_HINT: &str = "the audit_logs table rejects this user; grant insert and select where user_id matches the session user";

impl AuditQueryService {
    /// Probes the audit store with a one-row read for the caller.
    pub async fn status(&self, identity: &dyn IdentityProvider) -> ApplicationResult<AuditStatusDto> {
        let actor = require_owner(identity).await?;

        let status = match self.repo.list_for_actor(actor, 1, None).await {
            Ok(_) => AuditStatusDto {
                available: true,
                reason: None,
            },
            Err(err) if err.is_policy_violation() => {
                tracing::warn!(error = %err, "audit store denied access");
                AuditStatusDto {
                    available: false,
                    reason: Some(POLICY_HINT.to_string()),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "audit store unavailable");
                AuditStatusDto {
                    available: false,
                    reason: Some(err.to_string()),
                }
            }
        };
        Ok(status)
    }
}
