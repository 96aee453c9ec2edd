// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::audit::{AuditLog, AuditLogCursor, AuditLogRepository, NewAuditLog};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: Uuid,
    user_id: Uuid,
    table_name: String,
    record_id: String,
    action: String,
    old_values: Option<serde_json::Value>,
    new_values: Option<serde_json::Value>,
    changed_fields: Option<Vec<String>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: row.id,
            user_id: UserId::new(row.user_id),
            table_name: row.table_name,
            record_id: row.record_id,
            action: row.action.parse()?,
            old_values: row.old_values,
            new_values: row.new_values,
            changed_fields: row.changed_fields,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (user_id, table_name, record_id, action, old_values, new_values, changed_fields)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(log.user_id.as_uuid())
        .bind(log.table_name)
        .bind(log.record_id)
        .bind(log.action.as_str())
        .bind(log.old_values)
        .bind(log.new_values)
        .bind(log.changed_fields)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list_for_actor(
        &self,
        actor: UserId,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<String>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, user_id, table_name, record_id, action, old_values, new_values, changed_fields, created_at
             FROM audit_logs WHERE user_id = ",
        );
        builder.push_bind(actor.as_uuid());
        if let Some(cursor) = cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<AuditLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut logs = rows
            .into_iter()
            .map(AuditLog::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if logs.len() > limit as usize {
            logs.pop();
            if let Some(last) = logs.last() {
                next_cursor = Some(AuditLogCursor::new(last.created_at, last.id).encode());
            }
        }

        Ok((logs, next_cursor))
    }
}
