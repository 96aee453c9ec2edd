// src/application/commands/pipeline.rs
use std::sync::Arc;

use crate::application::{
    audit::{AuditEntry, AuditWriteError, AuditWriter},
    ports::{
        identity::IdentityProvider,
        views::{RouteScope, ViewInvalidator},
    },
};

/// Side effects that follow a persisted mutation: the audit append and the
/// view invalidation. Neither can fail the mutation.
pub struct MutationEffects {
    audit: Arc<AuditWriter>,
    views: Arc<dyn ViewInvalidator>,
}

impl MutationEffects {
    pub fn new(audit: Arc<AuditWriter>, views: Arc<dyn ViewInvalidator>) -> Self {
        Self { audit, views }
    }

    /// Writes the entry and swallows any failure after logging it.
    pub async fn audit(&self, identity: &dyn IdentityProvider, entry: AuditEntry) {
        let table = entry.table_name.clone();
        let record_id = entry.record_id.clone();
        let action = entry.action;

        match self.audit.write(identity, entry).await {
            Ok(()) => {
                tracing::debug!(table = %table, record_id = %record_id, action = %action, "audit entry written");
            }
            Err(AuditWriteError::Rejected {
                reason,
                policy_denied: true,
            }) => {
                tracing::warn!(
                    table = %table,
                    record_id = %record_id,
                    action = %action,
                    %reason,
                    "audit entry rejected by access policy; check that audit_logs allows inserts where user_id matches the session user"
                );
            }
            Err(err) => {
                tracing::warn!(
                    table = %table,
                    record_id = %record_id,
                    action = %action,
                    error = %err,
                    "audit entry was not written"
                );
            }
        }
    }

    pub fn invalidate(&self, scopes: &[RouteScope]) {
        for scope in scopes {
            self.views.invalidate(*scope);
        }
    }
}
