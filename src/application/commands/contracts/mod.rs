// src/application/commands/contracts/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use delete::DeleteContractCommand;
pub use service::ContractCommandService;
pub use update::UpdateContractCommand;
