// src/application/error.rs
use crate::domain::{errors::DomainError, validation::FieldErrors};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Context used when a store error reaches a caller without a named action.
pub const STORE_UNAVAILABLE: &str = "the data store could not complete the request";

/// Failure classes surfaced to callers of the application layer. Audit
/// write failures are deliberately absent: they never reach a caller.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("record not found")]
    NotFoundOrForbidden,

    /// `context` names the failed action and is safe to show; `detail` is the
    /// store's own message and stays in the logs.
    #[error("persistence failed: {context}: {detail}")]
    PersistenceFailed { context: String, detail: String },

    #[error("record changed before the update was written")]
    ConcurrentModification,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed(FieldErrors::single(field, reason))
    }

    pub fn persistence(detail: impl Into<String>) -> Self {
        Self::PersistenceFailed {
            context: STORE_UNAVAILABLE.to_string(),
            detail: detail.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Wraps a store error with the user-facing context of the failed action.
    pub fn persistence_with(context: &str, err: DomainError) -> Self {
        match err {
            DomainError::Validation(reason) => Self::validation("form", reason),
            DomainError::Conflict(reason) => Self::Conflict(reason),
            other => Self::PersistenceFailed {
                context: context.to_string(),
                detail: other.to_string(),
            },
        }
    }
}

impl From<FieldErrors> for ApplicationError {
    fn from(errors: FieldErrors) -> Self {
        Self::ValidationFailed(errors)
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(reason) => Self::validation("form", reason),
            DomainError::Conflict(reason) => Self::Conflict(reason),
            DomainError::NotFound(_) => Self::NotFoundOrForbidden,
            DomainError::PermissionDenied(reason) | DomainError::Persistence(reason) => {
                Self::persistence(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_become_persistence_failures() {
        let err: ApplicationError = DomainError::Persistence("connection reset".into()).into();
        assert!(matches!(
            err,
            ApplicationError::PersistenceFailed { context, detail }
                if context == STORE_UNAVAILABLE && detail == "connection reset"
        ));
    }

    #[test]
    fn context_is_prefixed() {
        let err = ApplicationError::persistence_with(
            "failed to save transaction",
            DomainError::Persistence("timeout".into()),
        );
        assert_eq!(
            err.to_string(),
            "persistence failed: failed to save transaction: persistence error: timeout"
        );
    }

    #[test]
    fn not_found_is_merged_with_forbidden() {
        let err: ApplicationError = DomainError::NotFound("transaction".into()).into();
        assert!(matches!(err, ApplicationError::NotFoundOrForbidden));
    }
}
