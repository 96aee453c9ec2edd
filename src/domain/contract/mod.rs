pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Contract, ContractValues, NewContract};
pub use repository::ContractRepository;
pub use value_objects::{ContractId, ContractStatus};

pub const TABLE_NAME: &str = "contracts";
