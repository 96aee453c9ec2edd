// src/presentation/http/controllers/contracts.rs
use super::forms::NumberInput;
use crate::application::{
    commands::contracts::{DeleteContractCommand, UpdateContractCommand},
    dto::ContractDto,
};
use crate::domain::validation::ContractForm;
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
pub struct ContractRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    #[schema(value_type = String, example = "12000")]
    pub total_value: NumberInput,
    #[serde(default)]
    #[schema(example = "active")]
    pub status: String,
    #[serde(default)]
    #[schema(example = "2024-03-01")]
    pub start_date: String,
    /// Blank or absent means open-ended.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<ContractRequest> for ContractForm {
    fn from(req: ContractRequest) -> Self {
        ContractForm {
            client_name: req.client_name,
            title: req.title,
            total_value: req.total_value.into_raw(),
            status: req.status,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/contracts",
    responses(
        (status = 200, description = "Caller's contracts, newest first.", body = [ContractDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Contracts"
)]
pub async fn list_contracts(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
) -> HttpResult<Json<Vec<ContractDto>>> {
    state
        .services
        .contract_queries
        .list(&session)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/contracts",
    request_body = ContractRequest,
    responses(
        (status = 201, description = "Contract created.", body = ContractDto),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Contracts"
)]
pub async fn create_contract(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<ContractRequest>,
) -> HttpResult<(StatusCode, Json<ContractDto>)> {
    state
        .services
        .contract_commands
        .add_contract(&session, payload.into())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/contracts/{id}",
    params(("id" = Uuid, Path, description = "Contract id")),
    request_body = ContractRequest,
    responses(
        (status = 200, description = "Contract replaced.", body = ContractDto),
        (status = 404, description = "Not found or not owned.", body = ErrorResponse),
        (status = 409, description = "Changed concurrently.", body = ErrorResponse)
    ),
    tag = "Contracts"
)]
pub async fn update_contract(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContractRequest>,
) -> HttpResult<Json<ContractDto>> {
    let command = UpdateContractCommand {
        id,
        form: payload.into(),
    };
    state
        .services
        .contract_commands
        .update_contract(&session, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/contracts/{id}",
    params(("id" = Uuid, Path, description = "Contract id")),
    responses(
        (status = 204, description = "Contract deleted."),
        (status = 404, description = "Not found or not owned.", body = ErrorResponse)
    ),
    tag = "Contracts"
)]
pub async fn delete_contract(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .contract_commands
        .delete_contract(&session, DeleteContractCommand { id })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
