// src/application/queries/reports.rs
use crate::{
    application::{
        dto::{
            CategoryTotalDto, DashboardSummaryDto, MonthlyTotalsDto, ProfitAndLossDto,
            TransactionDto,
        },
        error::ApplicationResult,
        ports::{
            identity::{IdentityProvider, require_owner},
            time::Clock,
        },
        queries::transactions::DEFAULT_RECENT_LIMIT,
    },
    domain::{
        reporting::{
            ReportEntry, category_spending, month_start, monthly_overview, overview_window,
            period_totals, profit_and_loss,
        },
        transaction::{TransactionFilter, TransactionRepository},
        user::UserId,
    },
};
use chrono::NaiveDate;
use std::sync::Arc;

pub const DEFAULT_OVERVIEW_MONTHS: u32 = 6;
pub const MAX_OVERVIEW_MONTHS: u32 = 24;

/// Optional date window for report queries; `until` is exclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPeriod {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

/// Reports are computed from the owner's transactions on every call.
pub struct ReportQueryService {
    repo: Arc<dyn TransactionRepository>,
    clock: Arc<dyn Clock>,
}

impl ReportQueryService {
    pub fn new(repo: Arc<dyn TransactionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    async fn entries(&self, owner: UserId, filter: TransactionFilter) -> ApplicationResult<Vec<ReportEntry>> {
        let transactions = self.repo.list_owned(owner, filter).await?;
        Ok(transactions.iter().map(ReportEntry::from).collect())
    }

    pub async fn profit_and_loss(
        &self,
        identity: &dyn IdentityProvider,
        period: ReportPeriod,
    ) -> ApplicationResult<ProfitAndLossDto> {
        let owner = require_owner(identity).await?;
        let entries = self
            .entries(owner, TransactionFilter::between(period.from, period.until))
            .await?;
        Ok(profit_and_loss(&entries).into())
    }

    pub async fn category_spending(
        &self,
        identity: &dyn IdentityProvider,
        period: ReportPeriod,
    ) -> ApplicationResult<Vec<CategoryTotalDto>> {
        let owner = require_owner(identity).await?;
        let entries = self
            .entries(owner, TransactionFilter::between(period.from, period.until))
            .await?;
        Ok(category_spending(&entries).into_iter().map(Into::into).collect())
    }

    pub async fn overview(
        &self,
        identity: &dyn IdentityProvider,
        months: Option<u32>,
    ) -> ApplicationResult<Vec<MonthlyTotalsDto>> {
        let owner = require_owner(identity).await?;
        let months = months
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_OVERVIEW_MONTHS)
            .min(MAX_OVERVIEW_MONTHS);
        let today = self.clock.today();
        let (from, until) = overview_window(today, months);

        let entries = self
            .entries(owner, TransactionFilter::between(Some(from), Some(until)))
            .await?;
        Ok(monthly_overview(&entries, today, months)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn dashboard_summary(
        &self,
        identity: &dyn IdentityProvider,
    ) -> ApplicationResult<DashboardSummaryDto> {
        let owner = require_owner(identity).await?;
        let since = month_start(self.clock.today());

        let entries = self
            .entries(owner, TransactionFilter::between(Some(since), None))
            .await?;
        let recent = self
            .repo
            .list_owned(owner, TransactionFilter::recent(DEFAULT_RECENT_LIMIT))
            .await?;

        Ok(DashboardSummaryDto {
            current_month: period_totals(&entries, since).into(),
            recent_transactions: recent.into_iter().map(TransactionDto::from).collect(),
        })
    }
}
