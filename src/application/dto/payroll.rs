use crate::domain::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TransactionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PayrollRunDto {
    pub date: NaiveDate,
    pub processed: usize,
    /// Sum of the salaries paid, as a positive amount.
    #[schema(value_type = String)]
    pub total_paid: Decimal,
    pub transactions: Vec<TransactionDto>,
}

impl PayrollRunDto {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            processed: 0,
            total_paid: Decimal::ZERO,
            transactions: Vec::new(),
        }
    }

    pub fn from_transactions(date: NaiveDate, created: Vec<Transaction>) -> Self {
        let total_paid = created.iter().map(|tx| tx.amount().abs()).sum();
        let transactions: Vec<TransactionDto> = created.into_iter().map(Into::into).collect();
        Self {
            date,
            processed: transactions.len(),
            total_paid,
            transactions,
        }
    }
}
