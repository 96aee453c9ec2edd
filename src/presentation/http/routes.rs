// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{
        account, audit, auth, contracts, employees, payroll, reports, transactions, views,
    },
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/account/profile", patch(account::update_profile))
        .route(
            "/api/v1/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/api/v1/transactions/recent",
            get(transactions::recent_transactions),
        )
        .route(
            "/api/v1/transactions/{id}",
            put(transactions::update_transaction).delete(transactions::delete_transaction),
        )
        .route(
            "/api/v1/contracts",
            get(contracts::list_contracts).post(contracts::create_contract),
        )
        .route(
            "/api/v1/contracts/{id}",
            put(contracts::update_contract).delete(contracts::delete_contract),
        )
        .route(
            "/api/v1/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/api/v1/employees/{id}",
            put(employees::update_employee).delete(employees::delete_employee),
        )
        .route("/api/v1/payroll/run", post(payroll::run_payroll))
        .route("/api/v1/reports/profit-loss", get(reports::profit_and_loss))
        .route(
            "/api/v1/reports/category-spending",
            get(reports::category_spending),
        )
        .route("/api/v1/reports/overview", get(reports::overview))
        .route("/api/v1/dashboard/summary", get(reports::dashboard_summary))
        .route("/api/v1/audit-logs", get(audit::list_audit_logs))
        .route("/api/v1/audit-logs/status", get(audit::audit_status))
        .route("/api/v1/views/{scope}", get(views::view_revision))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System",
    security(())
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
