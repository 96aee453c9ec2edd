pub mod audit;
pub mod contract;
pub mod employee;
pub mod errors;
pub mod money;
pub mod payroll;
pub mod reporting;
pub mod transaction;
pub mod user;
pub mod validation;
