pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Employee, EmployeeValues, NewEmployee};
pub use repository::EmployeeRepository;
pub use value_objects::EmployeeId;

pub const TABLE_NAME: &str = "employees";
