use crate::domain::contract::value_objects::{ContractId, ContractStatus};
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractValues {
    pub client_name: String,
    pub title: String,
    pub total_value: Decimal,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contract {
    pub id: ContractId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub values: ContractValues,
    pub created_at: DateTime<Utc>,
}

impl Contract {
    pub fn replace(&mut self, values: ContractValues) {
        self.values = values;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewContract {
    pub user_id: UserId,
    #[serde(flatten)]
    pub values: ContractValues,
}
