// src/application/commands/employees/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use delete::DeleteEmployeeCommand;
pub use service::EmployeeCommandService;
pub use update::UpdateEmployeeCommand;
