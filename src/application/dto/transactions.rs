use crate::domain::transaction::Transaction;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

/// Stored transaction. `amount` carries the sign: negative for expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: Uuid,
    pub description: String,
    #[schema(value_type = String, example = "-4.50")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    #[schema(example = "expense")]
    pub kind: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionDto {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.as_uuid(),
            description: tx.values.description,
            amount: tx.values.amount,
            kind: tx.values.kind.as_str().to_string(),
            category: tx.values.category,
            date: tx.values.date,
            created_at: tx.created_at,
        }
    }
}
