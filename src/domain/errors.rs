// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// True when the backing store refused the write because of grants or
    /// row-level security rather than because of the data itself.
    pub fn is_policy_violation(&self) -> bool {
        match self {
            DomainError::PermissionDenied(_) => true,
            DomainError::Persistence(msg) => msg.contains("row-level security"),
            _ => false,
        }
    }
}
