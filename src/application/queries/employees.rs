// src/application/queries/employees.rs
use crate::{
    application::{
        dto::{EmployeeDto, EmployeeRosterDto},
        error::ApplicationResult,
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::employee::EmployeeRepository,
};
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct EmployeeQueryService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeQueryService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Employees with the combined monthly salary cost.
    pub async fn roster(&self, identity: &dyn IdentityProvider) -> ApplicationResult<EmployeeRosterDto> {
        let owner = require_owner(identity).await?;
        let employees = self.repo.list_owned(owner).await?;
        let total_monthly_cost: Decimal = employees.iter().map(|e| e.values.salary).sum();

        Ok(EmployeeRosterDto {
            employees: employees.into_iter().map(EmployeeDto::from).collect(),
            total_monthly_cost,
        })
    }
}
