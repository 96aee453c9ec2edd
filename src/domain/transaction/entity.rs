// src/domain/transaction/entity.rs
use crate::domain::transaction::value_objects::{TransactionId, TransactionKind};
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Full replace-update payload. `amount` is already signed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionValues {
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub values: TransactionValues,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn replace(&mut self, values: TransactionValues) {
        self.values = values;
    }

    pub fn kind(&self) -> TransactionKind {
        self.values.kind
    }

    pub fn amount(&self) -> Decimal {
        self.values.amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub user_id: UserId,
    #[serde(flatten)]
    pub values: TransactionValues,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Transaction {
        Transaction {
            id: TransactionId::generate(),
            user_id: UserId::generate(),
            values: TransactionValues {
                description: "Coffee".into(),
                amount: Decimal::from_str("-4.50").unwrap(),
                kind: TransactionKind::Expense,
                category: "Alimentação".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn snapshot_flattens_values_and_renames_kind() {
        let json = serde_json::to_value(sample()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["id", "user_id", "description", "amount", "type", "category", "date", "created_at"]
        );
        assert_eq!(json["type"], "expense");
        assert_eq!(json["amount"], "-4.50");
        assert_eq!(json["date"], "2024-03-01");
    }

    #[test]
    fn replace_swaps_every_value() {
        let mut tx = sample();
        let mut values = tx.values.clone();
        values.category = "Compras".into();
        tx.replace(values.clone());
        assert_eq!(tx.values, values);
    }
}
