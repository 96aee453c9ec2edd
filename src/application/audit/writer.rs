// src/application/audit/writer.rs
use std::sync::Arc;

use crate::{
    application::ports::identity::IdentityProvider,
    domain::{
        audit::{AuditAction, AuditLogRepository, NewAuditLog},
        user::UserId,
    },
};
use serde_json::Value;
use thiserror::Error;

/// One mutation to be recorded, before the actor is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub table_name: String,
    pub record_id: String,
    pub action: AuditAction,
    pub old_values: Option<Value>,
    pub new_values: Option<Value>,
    pub changed_fields: Option<Vec<String>>,
}

impl AuditEntry {
    pub fn insert(table_name: &str, record_id: impl ToString, new_values: Value) -> Self {
        Self {
            table_name: table_name.to_string(),
            record_id: record_id.to_string(),
            action: AuditAction::Insert,
            old_values: None,
            new_values: Some(new_values),
            changed_fields: None,
        }
    }

    /// `changed_fields` is stored only when non-empty.
    pub fn update(
        table_name: &str,
        record_id: impl ToString,
        old_values: Value,
        new_values: Value,
        changed_fields: Vec<String>,
    ) -> Self {
        Self {
            table_name: table_name.to_string(),
            record_id: record_id.to_string(),
            action: AuditAction::Update,
            old_values: Some(old_values),
            new_values: Some(new_values),
            changed_fields: (!changed_fields.is_empty()).then_some(changed_fields),
        }
    }

    pub fn delete(table_name: &str, record_id: impl ToString, old_values: Value) -> Self {
        Self {
            table_name: table_name.to_string(),
            record_id: record_id.to_string(),
            action: AuditAction::Delete,
            old_values: Some(old_values),
            new_values: None,
            changed_fields: None,
        }
    }

    fn attribute_to(self, actor: UserId) -> NewAuditLog {
        NewAuditLog {
            user_id: actor,
            table_name: self.table_name,
            record_id: self.record_id,
            action: self.action,
            old_values: self.old_values,
            new_values: self.new_values,
            changed_fields: self.changed_fields,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditWriteError {
    #[error("no authenticated user to attribute the audit entry to")]
    MissingIdentity,

    #[error("audit store rejected the entry: {reason}")]
    Rejected { reason: String, policy_denied: bool },
}

/// Appends audit rows attributed to the current identity. A single attempt
/// is made per entry.
pub struct AuditWriter {
    repo: Arc<dyn AuditLogRepository>,
}

impl AuditWriter {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }

    pub async fn write(
        &self,
        identity: &dyn IdentityProvider,
        entry: AuditEntry,
    ) -> Result<(), AuditWriteError> {
        let actor = identity
            .current_user()
            .await
            .ok_or(AuditWriteError::MissingIdentity)?;

        self.repo
            .insert(entry.attribute_to(actor.id))
            .await
            .map_err(|err| AuditWriteError::Rejected {
                policy_denied: err.is_policy_violation(),
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_without_changes_stores_no_field_list() {
        let entry = AuditEntry::update("transactions", "1", json!({}), json!({}), Vec::new());
        assert_eq!(entry.changed_fields, None);
        assert_eq!(entry.action, AuditAction::Update);
    }

    #[test]
    fn delete_keeps_only_the_old_snapshot() {
        let entry = AuditEntry::delete("contracts", "7", json!({"title": "Site"}));
        assert!(entry.new_values.is_none());
        assert_eq!(entry.old_values, Some(json!({"title": "Site"})));
        assert_eq!(entry.record_id, "7");
    }
}
