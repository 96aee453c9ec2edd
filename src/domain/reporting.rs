// src/domain/reporting.rs
//! In-memory aggregation over an already fetched, owner-scoped set of
//! transactions. Nothing here is cached; callers recompute per request.

use crate::domain::transaction::{Transaction, TransactionKind};
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

impl From<&Transaction> for ReportEntry {
    fn from(tx: &Transaction) -> Self {
        Self {
            amount: tx.values.amount,
            kind: tx.values.kind,
            category: tx.values.category.clone(),
            date: tx.values.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitAndLoss {
    pub income_by_category: Vec<CategoryTotal>,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// Sums per category, keeping categories in first-seen order.
#[derive(Default)]
struct CategoryAccumulator {
    totals: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryAccumulator {
    fn add(&mut self, category: &str, amount: Decimal) {
        match self.index.get(category) {
            Some(&pos) => self.totals[pos].amount += amount,
            None => {
                self.index.insert(category.to_string(), self.totals.len());
                self.totals.push(CategoryTotal {
                    category: category.to_string(),
                    amount,
                });
            }
        }
    }

    fn total(&self) -> Decimal {
        self.totals.iter().map(|t| t.amount).sum()
    }

    fn into_totals(self) -> Vec<CategoryTotal> {
        self.totals
    }
}

pub fn profit_and_loss(entries: &[ReportEntry]) -> ProfitAndLoss {
    let mut income = CategoryAccumulator::default();
    let mut expenses = CategoryAccumulator::default();

    for entry in entries {
        match entry.kind {
            TransactionKind::Income => income.add(&entry.category, entry.amount.abs()),
            TransactionKind::Expense => expenses.add(&entry.category, entry.amount.abs()),
        }
    }

    let total_income = income.total();
    let total_expenses = expenses.total();

    ProfitAndLoss {
        income_by_category: income.into_totals(),
        expenses_by_category: expenses.into_totals(),
        total_income,
        total_expenses,
        net_profit: total_income - total_expenses,
    }
}

pub fn category_spending(entries: &[ReportEntry]) -> Vec<CategoryTotal> {
    let mut expenses = CategoryAccumulator::default();
    for entry in entries
        .iter()
        .filter(|entry| entry.kind == TransactionKind::Expense)
    {
        expenses.add(&entry.category, entry.amount.abs());
    }
    expenses.into_totals()
}

pub fn period_totals(entries: &[ReportEntry], since: NaiveDate) -> PeriodTotals {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for entry in entries.iter().filter(|entry| entry.date >= since) {
        match entry.kind {
            TransactionKind::Income => income += entry.amount.abs(),
            TransactionKind::Expense => expenses += entry.amount.abs(),
        }
    }
    PeriodTotals {
        income,
        expenses,
        net: income - expenses,
    }
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `[first day of the oldest month, first day of the month after today)`.
pub fn overview_window(today: NaiveDate, months: u32) -> (NaiveDate, NaiveDate) {
    let current = month_start(today);
    let back = months.saturating_sub(1);
    let from = current
        .checked_sub_months(Months::new(back))
        .unwrap_or(current);
    let until = current
        .checked_add_months(Months::new(1))
        .unwrap_or(current);
    (from, until)
}

/// Income and expense totals for each of the trailing `months` calendar
/// months ending with the month of `today`, oldest first. Months without
/// entries are present with zero totals.
pub fn monthly_overview(entries: &[ReportEntry], today: NaiveDate, months: u32) -> Vec<MonthlyTotals> {
    let (from, _) = overview_window(today, months);

    let mut buckets: Vec<MonthlyTotals> = (0..months)
        .filter_map(|offset| from.checked_add_months(Months::new(offset)))
        .map(|start| MonthlyTotals {
            year: start.year(),
            month: start.month(),
            label: start.format("%b").to_string(),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        })
        .collect();

    for entry in entries {
        let bucket = buckets
            .iter_mut()
            .find(|b| b.year == entry.date.year() && b.month == entry.date.month());
        if let Some(bucket) = bucket {
            match entry.kind {
                TransactionKind::Income => bucket.income += entry.amount.abs(),
                TransactionKind::Expense => bucket.expenses += entry.amount.abs(),
            }
        }
    }

    buckets
}
