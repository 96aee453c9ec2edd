use std::sync::Arc;

use crate::{
    application::{commands::MutationEffects, ports::views::RouteScope},
    domain::employee::EmployeeRepository,
};

/// Views that read employee data.
pub(super) const AFFECTED_VIEWS: [RouteScope; 1] = [RouteScope::Payroll];

pub struct EmployeeCommandService {
    pub(super) repo: Arc<dyn EmployeeRepository>,
    pub(super) effects: Arc<MutationEffects>,
}

impl EmployeeCommandService {
    pub fn new(repo: Arc<dyn EmployeeRepository>, effects: Arc<MutationEffects>) -> Self {
        Self { repo, effects }
    }
}
