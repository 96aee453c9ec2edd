use std::sync::Arc;

use super::PayrollAuditPolicy;
use crate::{
    application::{commands::MutationEffects, ports::time::Clock},
    domain::transaction::TransactionRepository,
};

pub struct PayrollCommandService {
    pub(super) repo: Arc<dyn TransactionRepository>,
    pub(super) effects: Arc<MutationEffects>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) audit_policy: PayrollAuditPolicy,
}

impl PayrollCommandService {
    pub fn new(
        repo: Arc<dyn TransactionRepository>,
        effects: Arc<MutationEffects>,
        clock: Arc<dyn Clock>,
        audit_policy: PayrollAuditPolicy,
    ) -> Self {
        Self {
            repo,
            effects,
            clock,
            audit_policy,
        }
    }

    pub fn audit_policy(&self) -> PayrollAuditPolicy {
        self.audit_policy
    }
}
