pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTransaction, Transaction, TransactionValues};
pub use repository::{TransactionFilter, TransactionRepository};
pub use value_objects::{TransactionId, TransactionKind};

/// Logical table name used for audit rows.
pub const TABLE_NAME: &str = "transactions";
