// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        audit::AuditWriter,
        commands::{
            MutationEffects,
            contracts::ContractCommandService,
            employees::EmployeeCommandService,
            payroll::{PayrollAuditPolicy, PayrollCommandService},
            transactions::TransactionCommandService,
            users::UserCommandService,
        },
        ports::{
            identity::Session,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            views::ViewInvalidator,
        },
        queries::{
            audit::AuditQueryService, contracts::ContractQueryService,
            employees::EmployeeQueryService, reports::ReportQueryService,
            transactions::TransactionQueryService, users::UserQueryService,
        },
    },
    domain::{
        audit::AuditLogRepository, contract::ContractRepository, employee::EmployeeRepository,
        transaction::TransactionRepository, user::UserRepository,
    },
};

/// Backing stores the services are built over.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub contracts: Arc<dyn ContractRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub audit_logs: Arc<dyn AuditLogRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub transaction_commands: Arc<TransactionCommandService>,
    pub contract_commands: Arc<ContractCommandService>,
    pub employee_commands: Arc<EmployeeCommandService>,
    pub payroll_commands: Arc<PayrollCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub transaction_queries: Arc<TransactionQueryService>,
    pub contract_queries: Arc<ContractQueryService>,
    pub employee_queries: Arc<EmployeeQueryService>,
    pub report_queries: Arc<ReportQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        views: Arc<dyn ViewInvalidator>,
        clock: Arc<dyn Clock>,
        payroll_audit: PayrollAuditPolicy,
    ) -> Self {
        let audit_writer = Arc::new(AuditWriter::new(Arc::clone(&repos.audit_logs)));
        let effects = Arc::new(MutationEffects::new(audit_writer, views));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
            Arc::clone(&effects),
        ));
        let transaction_commands = Arc::new(TransactionCommandService::new(
            Arc::clone(&repos.transactions),
            Arc::clone(&effects),
        ));
        let contract_commands = Arc::new(ContractCommandService::new(
            Arc::clone(&repos.contracts),
            Arc::clone(&effects),
        ));
        let employee_commands = Arc::new(EmployeeCommandService::new(
            Arc::clone(&repos.employees),
            Arc::clone(&effects),
        ));
        let payroll_commands = Arc::new(PayrollCommandService::new(
            Arc::clone(&repos.transactions),
            Arc::clone(&effects),
            Arc::clone(&clock),
            payroll_audit,
        ));

        Self {
            user_commands,
            transaction_commands,
            contract_commands,
            employee_commands,
            payroll_commands,
            user_queries: Arc::new(UserQueryService::new(Arc::clone(&repos.users))),
            transaction_queries: Arc::new(TransactionQueryService::new(Arc::clone(
                &repos.transactions,
            ))),
            contract_queries: Arc::new(ContractQueryService::new(Arc::clone(&repos.contracts))),
            employee_queries: Arc::new(EmployeeQueryService::new(Arc::clone(&repos.employees))),
            report_queries: Arc::new(ReportQueryService::new(
                Arc::clone(&repos.transactions),
                clock,
            )),
            audit_queries: Arc::new(AuditQueryService::new(repos.audit_logs)),
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Builds the request identity from an optional bearer token. Missing,
    /// expired or forged tokens all yield an anonymous session.
    pub async fn session_for(&self, token: Option<&str>) -> Session {
        let Some(token) = token else {
            return Session::anonymous();
        };
        match self.token_manager.authenticate(token).await {
            Ok(user) => Session::authenticated(user),
            Err(err) => {
                tracing::debug!(error = %err, "bearer token rejected");
                Session::anonymous()
            }
        }
    }
}
