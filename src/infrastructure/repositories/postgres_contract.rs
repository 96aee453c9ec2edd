// src/infrastructure/repositories/postgres_contract.rs
use super::map_sqlx;
use crate::domain::contract::{
    Contract, ContractId, ContractRepository, ContractValues, NewContract,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresContractRepository {
    pool: PgPool,
}

impl PostgresContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContractRow {
    id: Uuid,
    user_id: Uuid,
    client_name: String,
    title: String,
    total_value: Decimal,
    status: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContractRow> for Contract {
    type Error = DomainError;

    fn try_from(row: ContractRow) -> Result<Self, Self::Error> {
        Ok(Contract {
            id: ContractId::new(row.id),
            user_id: UserId::new(row.user_id),
            values: ContractValues {
                client_name: row.client_name,
                title: row.title,
                total_value: row.total_value,
                status: row.status.parse()?,
                start_date: row.start_date,
                end_date: row.end_date,
            },
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContractRepository for PostgresContractRepository {
    async fn insert(&self, contract: NewContract) -> DomainResult<Contract> {
        let NewContract { user_id, values } = contract;
        let row = sqlx::query_as::<_, ContractRow>(
            "INSERT INTO contracts (user_id, client_name, title, total_value, status, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, user_id, client_name, title, total_value, status, start_date, end_date, created_at",
        )
        .bind(user_id.as_uuid())
        .bind(values.client_name)
        .bind(values.title)
        .bind(values.total_value)
        .bind(values.status.as_str())
        .bind(values.start_date)
        .bind(values.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Contract::try_from(row)
    }

    async fn find_owned(&self, id: ContractId, owner: UserId) -> DomainResult<Option<Contract>> {
        let row = sqlx::query_as::<_, ContractRow>(
            "SELECT id, user_id, client_name, title, total_value, status, start_date, end_date, created_at
             FROM contracts WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Contract::try_from).transpose()
    }

    async fn update_owned(
        &self,
        id: ContractId,
        owner: UserId,
        values: &ContractValues,
    ) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE contracts
             SET client_name = $1, title = $2, total_value = $3, status = $4, start_date = $5, end_date = $6
             WHERE id = $7 AND user_id = $8",
        )
        .bind(values.client_name.as_str())
        .bind(values.title.as_str())
        .bind(values.total_value)
        .bind(values.status.as_str())
        .bind(values.start_date)
        .bind(values.end_date)
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete_owned(&self, id: ContractId, owner: UserId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Contract>> {
        let rows = sqlx::query_as::<_, ContractRow>(
            "SELECT id, user_id, client_name, title, total_value, status, start_date, end_date, created_at
             FROM contracts WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Contract::try_from).collect()
    }
}
