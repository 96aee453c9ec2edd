use std::sync::Arc;

use crate::{
    application::{commands::MutationEffects, ports::views::RouteScope},
    domain::contract::ContractRepository,
};

/// Views that read contract data.
pub(super) const AFFECTED_VIEWS: [RouteScope; 1] = [RouteScope::Contracts];

pub struct ContractCommandService {
    pub(super) repo: Arc<dyn ContractRepository>,
    pub(super) effects: Arc<MutationEffects>,
}

impl ContractCommandService {
    pub fn new(repo: Arc<dyn ContractRepository>, effects: Arc<MutationEffects>) -> Self {
        Self { repo, effects }
    }
}
