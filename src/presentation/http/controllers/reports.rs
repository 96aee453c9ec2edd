// src/presentation/http/controllers/reports.rs
use crate::application::{
    dto::{CategoryTotalDto, DashboardSummaryDto, MonthlyTotalsDto, ProfitAndLossDto},
    queries::reports::ReportPeriod,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::CurrentSession;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodParams {
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Exclusive upper date bound.
    pub until: Option<NaiveDate>,
}

impl From<PeriodParams> for ReportPeriod {
    fn from(p: PeriodParams) -> Self {
        ReportPeriod {
            from: p.from,
            until: p.until,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverviewParams {
    /// Trailing calendar months, default 6.
    pub months: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/reports/profit-loss",
    params(PeriodParams),
    responses(
        (status = 200, description = "Income and expenses by category.", body = ProfitAndLossDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Reports"
)]
pub async fn profit_and_loss(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<PeriodParams>,
) -> HttpResult<Json<ProfitAndLossDto>> {
    state
        .services
        .report_queries
        .profit_and_loss(&session, params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/reports/category-spending",
    params(PeriodParams),
    responses(
        (status = 200, description = "Expense totals by category.", body = [CategoryTotalDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Reports"
)]
pub async fn category_spending(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<PeriodParams>,
) -> HttpResult<Json<Vec<CategoryTotalDto>>> {
    state
        .services
        .report_queries
        .category_spending(&session, params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/reports/overview",
    params(OverviewParams),
    responses(
        (status = 200, description = "Monthly income and expenses, oldest first.", body = [MonthlyTotalsDto]),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Reports"
)]
pub async fn overview(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<OverviewParams>,
) -> HttpResult<Json<Vec<MonthlyTotalsDto>>> {
    state
        .services
        .report_queries
        .overview(&session, params.months)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/summary",
    responses(
        (status = 200, description = "Current month totals and latest transactions.", body = DashboardSummaryDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Reports"
)]
pub async fn dashboard_summary(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
) -> HttpResult<Json<DashboardSummaryDto>> {
    state
        .services
        .report_queries
        .dashboard_summary(&session)
        .await
        .into_http()
        .map(Json)
}
