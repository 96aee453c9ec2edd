use crate::domain::audit::AuditLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditLogDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub table_name: String,
    pub record_id: String,
    pub action: String,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub changed_fields: Option<Vec<String>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogDto {
    fn from(a: AuditLog) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id.as_uuid(),
            table_name: a.table_name,
            record_id: a.record_id,
            action: a.action.as_str().to_string(),
            old_values: a.old_values,
            new_values: a.new_values,
            changed_fields: a.changed_fields,
            created_at: a.created_at,
        }
    }
}

/// Whether the audit store currently accepts reads for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditStatusDto {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
