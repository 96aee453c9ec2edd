// src/presentation/http/controllers/employees.rs
use super::forms::NumberInput;
use crate::application::{
    commands::employees::{DeleteEmployeeCommand, UpdateEmployeeCommand},
    dto::{EmployeeDto, EmployeeRosterDto},
};
use crate::domain::validation::EmployeeForm;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    #[schema(value_type = String, example = "3000")]
    pub salary: NumberInput,
    #[serde(default)]
    #[schema(example = "2023-06-01")]
    pub hire_date: String,
}

impl From<EmployeeRequest> for EmployeeForm {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeForm {
            name: req.name,
            role: req.role,
            salary: req.salary.into_raw(),
            hire_date: req.hire_date,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "Roster with total monthly cost.", body = EmployeeRosterDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
) -> HttpResult<Json<EmployeeRosterDto>> {
    state
        .services
        .employee_queries
        .roster(&session)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee added.", body = EmployeeDto),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<EmployeeRequest>,
) -> HttpResult<(StatusCode, Json<EmployeeDto>)> {
    state
        .services
        .employee_commands
        .add_employee(&session, payload.into())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee replaced.", body = EmployeeDto),
        (status = 404, description = "Not found or not owned.", body = ErrorResponse),
        (status = 409, description = "Changed concurrently.", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn update_employee(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<EmployeeRequest>,
) -> HttpResult<Json<EmployeeDto>> {
    let command = UpdateEmployeeCommand {
        id,
        form: payload.into(),
    };
    state
        .services
        .employee_commands
        .update_employee(&session, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee removed."),
        (status = 404, description = "Not found or not owned.", body = ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .employee_commands
        .delete_employee(&session, DeleteEmployeeCommand { id })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
