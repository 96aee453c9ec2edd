// src/presentation/http/controllers/views.rs
use crate::application::ports::views::RouteScope;
use crate::infrastructure::views::ViewRevision;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/views/{scope}",
    params(("scope" = String, Path, description = "dashboard, contracts, payroll, reports or account")),
    responses(
        (status = 200, description = "Current revision of the cached view.", body = ViewRevision),
        (status = 404, description = "Unknown scope.", body = ErrorResponse)
    ),
    tag = "Views",
    security(())
)]
pub async fn view_revision(
    Extension(state): Extension<HttpState>,
    Path(scope): Path<String>,
) -> HttpResult<Json<ViewRevision>> {
    let scope: RouteScope = scope.parse().map_err(HttpError::not_found)?;
    Ok(Json(state.views.revision(scope)))
}
