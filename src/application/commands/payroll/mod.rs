mod policy;
mod run;
mod service;

pub use policy::PayrollAuditPolicy;
pub use run::RunPayrollCommand;
pub use service::PayrollCommandService;
