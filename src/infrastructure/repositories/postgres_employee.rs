// src/infrastructure/repositories/postgres_employee.rs
use super::map_sqlx;
use crate::domain::employee::{
    Employee, EmployeeId, EmployeeRepository, EmployeeValues, NewEmployee,
};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    role: Option<String>,
    salary: Decimal,
    hire_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: EmployeeId::new(row.id),
            user_id: UserId::new(row.user_id),
            values: EmployeeValues {
                name: row.name,
                role: row.role,
                salary: row.salary,
                hire_date: row.hire_date,
            },
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> DomainResult<Employee> {
        let NewEmployee { user_id, values } = employee;
        sqlx::query_as::<_, EmployeeRow>(
            "INSERT INTO employees (user_id, name, role, salary, hire_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, name, role, salary, hire_date, created_at",
        )
        .bind(user_id.as_uuid())
        .bind(values.name)
        .bind(values.role)
        .bind(values.salary)
        .bind(values.hire_date)
        .fetch_one(&self.pool)
        .await
        .map(Employee::from)
        .map_err(map_sqlx)
    }

    async fn find_owned(&self, id: EmployeeId, owner: UserId) -> DomainResult<Option<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, user_id, name, role, salary, hire_date, created_at
             FROM employees WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Employee::from))
        .map_err(map_sqlx)
    }

    async fn update_owned(
        &self,
        id: EmployeeId,
        owner: UserId,
        values: &EmployeeValues,
    ) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE employees
             SET name = $1, role = $2, salary = $3, hire_date = $4
             WHERE id = $5 AND user_id = $6",
        )
        .bind(values.name.as_str())
        .bind(values.role.as_deref())
        .bind(values.salary)
        .bind(values.hire_date)
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete_owned(&self, id: EmployeeId, owner: UserId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, user_id, name, role, salary, hire_date, created_at
             FROM employees WHERE user_id = $1
             ORDER BY name ASC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(Employee::from).collect())
        .map_err(map_sqlx)
    }
}
