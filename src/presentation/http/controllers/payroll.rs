// src/presentation/http/controllers/payroll.rs
use super::forms::NumberInput;
use crate::application::{commands::payroll::RunPayrollCommand, dto::PayrollRunDto};
use crate::domain::payroll::PayrollEmployee;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentSession;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PayrollEmployeeRequest {
    pub id: String,
    pub name: String,
    #[schema(value_type = String, example = "3000")]
    pub salary: NumberInput,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RunPayrollRequest {
    #[serde(default)]
    pub employees: Vec<PayrollEmployeeRequest>,
}

#[utoipa::path(
    post,
    path = "/api/v1/payroll/run",
    request_body = RunPayrollRequest,
    responses(
        (status = 200, description = "One expense recorded per employee.", body = PayrollRunDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 422, description = "A salary is not a number.", body = ErrorResponse),
        (status = 502, description = "Batch rejected; nothing was recorded.", body = ErrorResponse)
    ),
    tag = "Payroll"
)]
pub async fn run_payroll(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<RunPayrollRequest>,
) -> HttpResult<Json<PayrollRunDto>> {
    let employees = payload
        .employees
        .into_iter()
        .map(|e| PayrollEmployee {
            id: e.id,
            name: e.name,
            salary: e.salary.into_raw(),
        })
        .collect();

    state
        .services
        .payroll_commands
        .run_payroll(&session, RunPayrollCommand { employees })
        .await
        .into_http()
        .map(Json)
}
