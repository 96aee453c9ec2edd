// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit_log;
mod postgres_contract;
mod postgres_employee;
mod postgres_transaction;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_contract::PostgresContractRepository;
pub use postgres_employee::PostgresEmployeeRepository;
pub use postgres_transaction::PostgresTransactionRepository;
pub use postgres_user::PostgresUserRepository;
