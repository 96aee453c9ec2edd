// src/presentation/http/controllers/transactions.rs
use super::forms::NumberInput;
use crate::application::{
    commands::transactions::{DeleteTransactionCommand, UpdateTransactionCommand},
    dto::TransactionDto,
    queries::transactions::ListTransactionsQuery,
};
use crate::domain::validation::TransactionForm;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransactionRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(value_type = String, example = "4.50")]
    pub amount: NumberInput,
    #[serde(rename = "type", default)]
    #[schema(example = "expense")]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    #[schema(example = "2024-03-01")]
    pub date: String,
}

impl From<TransactionRequest> for TransactionForm {
    fn from(req: TransactionRequest) -> Self {
        TransactionForm {
            description: req.description,
            amount: req.amount.into_raw(),
            kind: req.kind,
            category: req.category,
            date: req.date,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionListParams {
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Exclusive upper date bound.
    pub until: Option<NaiveDate>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentParams {
    /// Defaults to 10.
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    params(TransactionListParams),
    responses(
        (status = 200, description = "Caller's transactions, newest date first.", body = [TransactionDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn list_transactions(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<TransactionListParams>,
) -> HttpResult<Json<Vec<TransactionDto>>> {
    let query = ListTransactionsQuery {
        from: params.from,
        until: params.until,
        limit: params.limit,
    };
    state
        .services
        .transaction_queries
        .list(&session, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/transactions/recent",
    params(RecentParams),
    responses(
        (status = 200, description = "Latest transactions.", body = [TransactionDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn recent_transactions(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<RecentParams>,
) -> HttpResult<Json<Vec<TransactionDto>>> {
    state
        .services
        .transaction_queries
        .recent(&session, params.limit)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    request_body = TransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded.", body = TransactionDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse),
        (status = 502, description = "Store rejected the write.", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn create_transaction(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<TransactionRequest>,
) -> HttpResult<(StatusCode, Json<TransactionDto>)> {
    state
        .services
        .transaction_commands
        .add_transaction(&session, payload.into())
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/transactions/{id}",
    params(("id" = Uuid, Path, description = "Transaction id")),
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Transaction replaced.", body = TransactionDto),
        (status = 404, description = "Not found or not owned.", body = ErrorResponse),
        (status = 409, description = "Changed concurrently.", body = ErrorResponse),
        (status = 422, description = "Invalid fields.", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn update_transaction(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionRequest>,
) -> HttpResult<Json<TransactionDto>> {
    let command = UpdateTransactionCommand {
        id,
        form: payload.into(),
    };
    state
        .services
        .transaction_commands
        .update_transaction(&session, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/transactions/{id}",
    params(("id" = Uuid, Path, description = "Transaction id")),
    responses(
        (status = 204, description = "Transaction deleted."),
        (status = 404, description = "Not found or not owned.", body = ErrorResponse)
    ),
    tag = "Transactions"
)]
pub async fn delete_transaction(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .transaction_commands
        .delete_transaction(&session, DeleteTransactionCommand { id })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
