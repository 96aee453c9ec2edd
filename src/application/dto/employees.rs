use crate::domain::employee::Employee;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    #[schema(value_type = String, example = "3000.00")]
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.as_uuid(),
            name: employee.values.name,
            role: employee.values.role,
            salary: employee.values.salary,
            hire_date: employee.values.hire_date,
            created_at: employee.created_at,
        }
    }
}

/// Employee listing with the summed monthly salary cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeRosterDto {
    pub employees: Vec<EmployeeDto>,
    #[schema(value_type = String)]
    pub total_monthly_cost: Decimal,
}
