// src/presentation/http/controllers/mod.rs
pub mod account;
pub mod audit;
pub mod auth;
pub mod contracts;
pub mod employees;
pub mod forms;
pub mod payroll;
pub mod reports;
pub mod transactions;
pub mod views;
