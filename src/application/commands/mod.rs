pub mod contracts;
pub mod employees;
pub mod payroll;
pub mod pipeline;
pub mod transactions;
pub mod users;

pub use pipeline::MutationEffects;
