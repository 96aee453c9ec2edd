// src/presentation/http/controllers/audit.rs
use crate::application::dto::{AuditLogDto, AuditStatusDto, CursorPage};
use crate::application::queries::audit::ListAuditTrailQuery;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentSession;
use crate::presentation::http::openapi::AuditLogListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAuditParams {
    /// Page size, default 50, at most 100.
    pub limit: Option<u32>,
    /// Opaque cursor from the previous page.
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/audit-logs",
    params(ListAuditParams),
    responses(
        (status = 200, description = "Caller's audit trail, newest first.", body = AuditLogListResponse),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 422, description = "Malformed cursor.", body = ErrorResponse)
    ),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<ListAuditParams>,
) -> HttpResult<Json<CursorPage<AuditLogDto>>> {
    let query = ListAuditTrailQuery {
        limit: params.limit,
        cursor: params.cursor,
    };
    state
        .services
        .audit_queries
        .list_trail(&session, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/audit-logs/status",
    responses(
        (status = 200, description = "Whether audit entries can be read.", body = AuditStatusDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Audit"
)]
pub async fn audit_status(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
) -> HttpResult<Json<AuditStatusDto>> {
    state
        .services
        .audit_queries
        .status(&session)
        .await
        .into_http()
        .map(Json)
}
