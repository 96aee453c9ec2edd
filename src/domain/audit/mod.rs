pub mod cursor;
#[cfg(test)]
mod cursor_tests;
pub mod diff;
pub mod entity;
pub mod repository;

pub use cursor::AuditLogCursor;
pub use diff::{changed_fields, snapshot};
pub use entity::{AuditAction, AuditLog, NewAuditLog};
pub use repository::AuditLogRepository;
