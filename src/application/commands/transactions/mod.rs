// src/application/commands/transactions/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use delete::DeleteTransactionCommand;
pub use service::TransactionCommandService;
pub use update::UpdateTransactionCommand;
