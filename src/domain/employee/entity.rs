use crate::domain::employee::value_objects::EmployeeId;
use crate::domain::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeValues {
    pub name: String,
    pub role: Option<String>,
    /// Monthly gross salary.
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub values: EmployeeValues,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn replace(&mut self, values: EmployeeValues) {
        self.values = values;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub user_id: UserId,
    #[serde(flatten)]
    pub values: EmployeeValues,
}
