// src/presentation/http/controllers/account.rs
use crate::application::{commands::users::UpdateProfileCommand, dto::UserProfileDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentSession;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub full_name: String,
}

#[utoipa::path(
    patch,
    path = "/api/v1/account/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated.", body = UserProfileDto),
        (status = 401, description = "Not signed in.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid full name.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_commands
        .update_profile(
            &session,
            UpdateProfileCommand {
                full_name: payload.full_name,
            },
        )
        .await
        .into_http()
        .map(Json)
}
