// src/domain/payroll.rs
use crate::domain::money::{MoneyError, positive_money};
use crate::domain::transaction::{NewTransaction, TransactionKind, TransactionValues};
use crate::domain::user::UserId;
use crate::domain::validation::FieldErrors;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const PAYROLL_CATEGORY: &str = "Payroll";

/// Employee selection as shown on the payroll screen. The selection comes
/// from an owner-scoped listing and is not re-checked against ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollEmployee {
    pub id: String,
    pub name: String,
    pub salary: String,
}

pub fn payroll_description(name: &str) -> String {
    format!("Payroll: {name}")
}

/// One expense row per employee, all dated `date`. The salary magnitude is
/// used; salaries that do not parse, round to zero cents or exceed the
/// amount ceiling are reported under `salary:<employee id>`.
pub fn build_payroll_batch(
    owner: UserId,
    employees: &[PayrollEmployee],
    date: NaiveDate,
) -> Result<Vec<NewTransaction>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut batch = Vec::with_capacity(employees.len());

    for employee in employees {
        let salary = Decimal::from_str(employee.salary.trim())
            .map_err(|_| MoneyError::NotPositive)
            .and_then(|salary| positive_money(salary.abs()));
        let salary = match salary {
            Ok(salary) => salary,
            Err(MoneyError::NotPositive) => {
                errors.insert(
                    format!("salary:{}", employee.id),
                    format!("Salary for {} must be a positive number", employee.name),
                );
                continue;
            }
            Err(MoneyError::TooLarge) => {
                errors.insert(
                    format!("salary:{}", employee.id),
                    format!("Salary for {} is too large", employee.name),
                );
                continue;
            }
        };

        batch.push(NewTransaction {
            user_id: owner,
            values: TransactionValues {
                description: payroll_description(&employee.name),
                amount: TransactionKind::Expense.apply_sign(salary),
                kind: TransactionKind::Expense,
                category: PAYROLL_CATEGORY.to_string(),
                date,
            },
        });
    }

    if errors.is_empty() { Ok(batch) } else { Err(errors) }
}
