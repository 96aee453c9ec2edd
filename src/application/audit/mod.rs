mod writer;

pub use writer::{AuditEntry, AuditWriteError, AuditWriter};
