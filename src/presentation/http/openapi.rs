// src/presentation/http/openapi.rs
use crate::application::dto::{AuditLogDto, CursorPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuditLogListResponse {
    pub items: Vec<AuditLogDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<AuditLogDto>> for AuditLogListResponse {
    fn from(page: CursorPage<AuditLogDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::account::update_profile,
        crate::presentation::http::controllers::transactions::list_transactions,
        crate::presentation::http::controllers::transactions::recent_transactions,
        crate::presentation::http::controllers::transactions::create_transaction,
        crate::presentation::http::controllers::transactions::update_transaction,
        crate::presentation::http::controllers::transactions::delete_transaction,
        crate::presentation::http::controllers::contracts::list_contracts,
        crate::presentation::http::controllers::contracts::create_contract,
        crate::presentation::http::controllers::contracts::update_contract,
        crate::presentation::http::controllers::contracts::delete_contract,
        crate::presentation::http::controllers::employees::list_employees,
        crate::presentation::http::controllers::employees::create_employee,
        crate::presentation::http::controllers::employees::update_employee,
        crate::presentation::http::controllers::employees::delete_employee,
        crate::presentation::http::controllers::payroll::run_payroll,
        crate::presentation::http::controllers::reports::profit_and_loss,
        crate::presentation::http::controllers::reports::category_spending,
        crate::presentation::http::controllers::reports::overview,
        crate::presentation::http::controllers::reports::dashboard_summary,
        crate::presentation::http::controllers::audit::list_audit_logs,
        crate::presentation::http::controllers::audit::audit_status,
        crate::presentation::http::controllers::views::view_revision,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            AuditLogListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::account::UpdateProfileRequest,
            crate::presentation::http::controllers::transactions::TransactionRequest,
            crate::presentation::http::controllers::contracts::ContractRequest,
            crate::presentation::http::controllers::employees::EmployeeRequest,
            crate::presentation::http::controllers::payroll::RunPayrollRequest,
            crate::presentation::http::controllers::payroll::PayrollEmployeeRequest,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::TransactionDto,
            crate::application::dto::ContractDto,
            crate::application::dto::EmployeeDto,
            crate::application::dto::EmployeeRosterDto,
            crate::application::dto::PayrollRunDto,
            crate::application::dto::ProfitAndLossDto,
            crate::application::dto::CategoryTotalDto,
            crate::application::dto::MonthlyTotalsDto,
            crate::application::dto::PeriodTotalsDto,
            crate::application::dto::DashboardSummaryDto,
            crate::application::dto::AuditLogDto,
            crate::application::dto::AuditStatusDto,
            crate::application::ports::views::RouteScope,
            crate::infrastructure::views::ViewRevision
        )
    ),
    tags(
        (name = "Auth", description = "Registration and sign-in"),
        (name = "Account", description = "Profile of the signed-in user"),
        (name = "Transactions", description = "Income and expense records"),
        (name = "Contracts", description = "Client contracts"),
        (name = "Employees", description = "Employee roster"),
        (name = "Payroll", description = "Payroll runs"),
        (name = "Reports", description = "Financial reports and dashboard"),
        (name = "Audit", description = "Audit trail of the signed-in user"),
        (name = "Views", description = "Cache revision of dashboard views"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Finboard API",
        description = "Small-business finance dashboard backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
