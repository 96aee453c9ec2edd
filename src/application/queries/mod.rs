pub mod audit;
pub mod contracts;
pub mod employees;
pub mod reports;
pub mod transactions;
pub mod users;
