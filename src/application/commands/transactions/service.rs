use std::sync::Arc;

use crate::{
    application::{commands::MutationEffects, ports::views::RouteScope},
    domain::transaction::TransactionRepository,
};

/// Views that read transaction data.
pub(super) const AFFECTED_VIEWS: [RouteScope; 2] = [RouteScope::Dashboard, RouteScope::Reports];

pub struct TransactionCommandService {
    pub(super) repo: Arc<dyn TransactionRepository>,
    pub(super) effects: Arc<MutationEffects>,
}

impl TransactionCommandService {
    pub fn new(repo: Arc<dyn TransactionRepository>, effects: Arc<MutationEffects>) -> Self {
        Self { repo, effects }
    }
}
