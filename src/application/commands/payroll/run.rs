use super::{PayrollAuditPolicy, PayrollCommandService};
use crate::{
    application::{
        audit::AuditEntry,
        dto::PayrollRunDto,
        error::{ApplicationError, ApplicationResult},
        ports::{
            identity::{IdentityProvider, require_owner},
            views::RouteScope,
        },
    },
    domain::{
        audit::snapshot,
        payroll::{PayrollEmployee, build_payroll_batch},
        transaction::TABLE_NAME,
    },
};

pub struct RunPayrollCommand {
    pub employees: Vec<PayrollEmployee>,
}

impl PayrollCommandService {
    /// Records one salary expense per selected employee, dated today, in a
    /// single all-or-nothing batch.
    pub async fn run_payroll(
        &self,
        identity: &dyn IdentityProvider,
        command: RunPayrollCommand,
    ) -> ApplicationResult<PayrollRunDto> {
        let owner = require_owner(identity).await?;
        let date = self.clock.today();

        if command.employees.is_empty() {
            tracing::debug!("payroll run with no employees selected");
            return Ok(PayrollRunDto::empty(date));
        }

        let batch = build_payroll_batch(owner, &command.employees, date)?;
        let created = self
            .repo
            .insert_batch(batch)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to process payroll", err))?;
        tracing::info!(count = created.len(), %date, "payroll processed");

        match self.audit_policy {
            PayrollAuditPolicy::Skip => {
                tracing::debug!(count = created.len(), "payroll audit disabled by policy");
            }
            PayrollAuditPolicy::PerTransaction => {
                for tx in &created {
                    self.effects
                        .audit(identity, AuditEntry::insert(TABLE_NAME, tx.id, snapshot(tx)))
                        .await;
                }
            }
        }
        self.effects
            .invalidate(&[RouteScope::Dashboard, RouteScope::Reports]);

        Ok(PayrollRunDto::from_transactions(date, created))
    }
}
