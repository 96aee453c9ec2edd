use crate::domain::contract::Contract;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContractDto {
    pub id: Uuid,
    pub client_name: String,
    pub title: String,
    #[schema(value_type = String, example = "12000.00")]
    pub total_value: Decimal,
    #[schema(example = "active")]
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Contract> for ContractDto {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id.as_uuid(),
            client_name: contract.values.client_name,
            title: contract.values.title,
            total_value: contract.values.total_value,
            status: contract.values.status.as_str().to_string(),
            start_date: contract.values.start_date,
            end_date: contract.values.end_date,
            created_at: contract.created_at,
        }
    }
}
