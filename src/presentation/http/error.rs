// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    fields: Option<BTreeMap<String, String>>,
    redirect: Option<&'static str>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Unauthenticated => {
                let mut http = Self::new(StatusCode::UNAUTHORIZED, "authentication required");
                http.redirect = Some(LOGIN_PATH);
                http
            }
            ApplicationError::ValidationFailed(fields) => {
                let mut http = Self::new(StatusCode::UNPROCESSABLE_ENTITY, fields.to_string());
                http.fields = Some(fields.into_inner());
                http
            }
            ApplicationError::NotFoundOrForbidden => {
                Self::new(StatusCode::NOT_FOUND, "record not found")
            }
            ApplicationError::ConcurrentModification => Self::new(
                StatusCode::CONFLICT,
                "the record changed or was removed before the update was saved; reload and try again",
            ),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::PersistenceFailed { context, detail } => {
                tracing::error!(%context, error = %detail, "persistence failure");
                Self::new(StatusCode::BAD_GATEWAY, context)
            }
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fields: None,
            redirect: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            fields: self.fields,
            redirect: self.redirect.map(str::to_string),
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Per-field validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    /// Where the client should navigate, e.g. the login page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
