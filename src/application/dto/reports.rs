use crate::domain::reporting::{CategoryTotal, MonthlyTotals, PeriodTotals, ProfitAndLoss};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TransactionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTotalDto {
    pub category: String,
    #[schema(value_type = String)]
    pub amount: Decimal,
}

impl From<CategoryTotal> for CategoryTotalDto {
    fn from(total: CategoryTotal) -> Self {
        Self {
            category: total.category,
            amount: total.amount,
        }
    }
}

fn convert(totals: Vec<CategoryTotal>) -> Vec<CategoryTotalDto> {
    totals.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfitAndLossDto {
    pub income_by_category: Vec<CategoryTotalDto>,
    pub expenses_by_category: Vec<CategoryTotalDto>,
    #[schema(value_type = String)]
    pub total_income: Decimal,
    #[schema(value_type = String)]
    pub total_expenses: Decimal,
    #[schema(value_type = String)]
    pub net_profit: Decimal,
}

impl From<ProfitAndLoss> for ProfitAndLossDto {
    fn from(report: ProfitAndLoss) -> Self {
        Self {
            income_by_category: convert(report.income_by_category),
            expenses_by_category: convert(report.expenses_by_category),
            total_income: report.total_income,
            total_expenses: report.total_expenses,
            net_profit: report.net_profit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyTotalsDto {
    pub year: i32,
    pub month: u32,
    pub label: String,
    #[schema(value_type = String)]
    pub income: Decimal,
    #[schema(value_type = String)]
    pub expenses: Decimal,
}

impl From<MonthlyTotals> for MonthlyTotalsDto {
    fn from(m: MonthlyTotals) -> Self {
        Self {
            year: m.year,
            month: m.month,
            label: m.label,
            income: m.income,
            expenses: m.expenses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodTotalsDto {
    #[schema(value_type = String)]
    pub income: Decimal,
    #[schema(value_type = String)]
    pub expenses: Decimal,
    #[schema(value_type = String)]
    pub net: Decimal,
}

impl From<PeriodTotals> for PeriodTotalsDto {
    fn from(p: PeriodTotals) -> Self {
        Self {
            income: p.income,
            expenses: p.expenses,
            net: p.net,
        }
    }
}

/// Current-month cards plus the latest transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub current_month: PeriodTotalsDto,
    pub recent_transactions: Vec<TransactionDto>,
}
