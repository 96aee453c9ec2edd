// src/domain/validation.rs
//! Field-level checks for the three editable record types.
//!
//! Every validator walks all of its rules and reports every violation at
//! once, so a form can highlight all offending inputs after one submit. The
//! `into_values` conversions run the same rules and, when they pass, hand
//! back the trimmed and normalized payload that gets persisted.

use crate::domain::contract::{ContractStatus, ContractValues};
use crate::domain::employee::EmployeeValues;
use crate::domain::money::{MoneyError, positive_money};
use crate::domain::transaction::{TransactionKind, TransactionValues};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Field name to human readable reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, reason);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.insert(field.into(), reason.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {reason}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl From<FieldErrors> for ValidationReport {
    fn from(errors: FieldErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Raw transaction inputs as submitted by a form.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContractForm {
    pub client_name: String,
    pub title: String,
    pub total_value: String,
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub role: Option<String>,
    pub salary: String,
    pub hire_date: String,
}

pub fn validate_transaction(form: &TransactionForm) -> ValidationReport {
    check_transaction(form).err().unwrap_or_default().into()
}

pub fn validate_contract(form: &ContractForm) -> ValidationReport {
    check_contract(form).err().unwrap_or_default().into()
}

pub fn validate_employee(form: &EmployeeForm) -> ValidationReport {
    check_employee(form).err().unwrap_or_default().into()
}

impl TransactionForm {
    /// Validate, trim and sign-normalize.
    pub fn into_values(self) -> Result<TransactionValues, FieldErrors> {
        check_transaction(&self)
    }
}

impl ContractForm {
    pub fn into_values(self) -> Result<ContractValues, FieldErrors> {
        check_contract(&self)
    }
}

impl EmployeeForm {
    pub fn into_values(self) -> Result<EmployeeValues, FieldErrors> {
        check_employee(&self)
    }
}

fn check_transaction(form: &TransactionForm) -> Result<TransactionValues, FieldErrors> {
    let mut errors = FieldErrors::new();

    let description = form.description.trim();
    if description.is_empty() {
        errors.insert("description", "Description is required");
    } else if form.description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert("description", "Description too long");
    }

    let amount = money_field(&mut errors, "amount", &form.amount, "Amount");

    let kind = TransactionKind::from_str(&form.kind).ok();
    if kind.is_none() {
        errors.insert("type", "Type is required");
    }

    let category = form.category.trim();
    if category.is_empty() {
        errors.insert("category", "Category is required");
    }

    let date = parse_calendar_date(&form.date);
    if date.is_none() {
        errors.insert("date", "Invalid date format");
    }

    match (amount, kind, date) {
        (Some(amount), Some(kind), Some(date)) if errors.is_empty() => Ok(TransactionValues {
            description: description.to_string(),
            amount: kind.apply_sign(amount),
            kind,
            category: category.to_string(),
            date,
        }),
        _ => Err(errors),
    }
}

fn check_contract(form: &ContractForm) -> Result<ContractValues, FieldErrors> {
    let mut errors = FieldErrors::new();

    let client_name = form.client_name.trim();
    if client_name.is_empty() {
        errors.insert("client_name", "Client name is required");
    }

    let title = form.title.trim();
    if title.is_empty() {
        errors.insert("title", "Title is required");
    }

    let total_value = money_field(&mut errors, "total_value", &form.total_value, "Total value");

    let status = ContractStatus::from_str(&form.status).ok();
    if status.is_none() {
        errors.insert("status", "Status is required");
    }

    let start_date = parse_calendar_date(&form.start_date);
    if start_date.is_none() {
        errors.insert("start_date", "Invalid date format");
    }

    let end_date = match form.end_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match parse_calendar_date(raw) {
            Some(end) => {
                if start_date.is_some_and(|start| end < start) {
                    errors.insert("end_date", "End date cannot be before start date");
                }
                Some(end)
            }
            None => {
                errors.insert("end_date", "Invalid date format");
                None
            }
        },
    };

    match (total_value, status, start_date) {
        (Some(total_value), Some(status), Some(start_date)) if errors.is_empty() => {
            Ok(ContractValues {
                client_name: client_name.to_string(),
                title: title.to_string(),
                total_value,
                status,
                start_date,
                end_date,
            })
        }
        _ => Err(errors),
    }
}

fn check_employee(form: &EmployeeForm) -> Result<EmployeeValues, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert("name", "Name is required");
    }

    let salary = money_field(&mut errors, "salary", &form.salary, "Salary");

    let hire_date = parse_calendar_date(&form.hire_date);
    if hire_date.is_none() {
        errors.insert("hire_date", "Invalid date format");
    }

    let role = form
        .role
        .as_deref()
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string);

    match (salary, hire_date) {
        (Some(salary), Some(hire_date)) if errors.is_empty() => Ok(EmployeeValues {
            name: name.to_string(),
            role,
            salary,
            hire_date,
        }),
        _ => Err(errors),
    }
}

/// Parses a form amount into cents. Sub-cent input that rounds to zero is
/// not positive.
fn parse_money(raw: &str) -> Result<Decimal, MoneyError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| MoneyError::NotPositive)
        .and_then(positive_money)
}

fn money_field(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    label: &str,
) -> Option<Decimal> {
    match parse_money(raw) {
        Ok(value) => Some(value),
        Err(MoneyError::NotPositive) => {
            errors.insert(field, format!("{label} must be positive"));
            None
        }
        Err(MoneyError::TooLarge) => {
            errors.insert(field, format!("{label} too large"));
            None
        }
    }
}

/// `YYYY-MM-DD` that also names a real calendar day.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
