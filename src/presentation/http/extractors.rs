// src/presentation/http/extractors.rs
use crate::{
    application::{error::ApplicationError, ports::identity::Session},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// The request's identity. Never rejects for missing or invalid credentials:
/// those yield an anonymous session and the service decides what to do.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts.headers.typed_get::<Authorization<Bearer>>();
        let session = app_state
            .services
            .session_for(header.as_ref().map(|h| h.token()))
            .await;

        Ok(Self(session))
    }
}
