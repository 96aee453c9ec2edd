// src/infrastructure/repositories/postgres_transaction.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::transaction::{
    NewTransaction, Transaction, TransactionFilter, TransactionId, TransactionRepository,
    TransactionValues,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, description, amount, type, category, date, created_at";

#[derive(Clone)]
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TransactionRow {
    id: Uuid,
    user_id: Uuid,
    description: String,
    amount: Decimal,
    #[sqlx(rename = "type")]
    kind: String,
    category: String,
    date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: TransactionId::new(row.id),
            user_id: UserId::new(row.user_id),
            values: TransactionValues {
                description: row.description,
                amount: row.amount,
                kind: row.kind.parse()?,
                category: row.category,
                date: row.date,
            },
            created_at: row.created_at,
        })
    }
}

async fn insert_row(pool: &PgPool, new: &NewTransaction) -> DomainResult<Transaction> {
    let row = sqlx::query_as::<_, TransactionRow>(&format!(
        "INSERT INTO transactions (user_id, description, amount, type, category, date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    ))
    .bind(new.user_id.as_uuid())
    .bind(new.values.description.as_str())
    .bind(new.values.amount)
    .bind(new.values.kind.as_str())
    .bind(new.values.category.as_str())
    .bind(new.values.date)
    .fetch_one(pool)
    .await
    .map_err(map_sqlx)?;

    Transaction::try_from(row)
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn insert(&self, transaction: NewTransaction) -> DomainResult<Transaction> {
        insert_row(&self.pool, &transaction).await
    }

    async fn insert_batch(&self, batch: Vec<NewTransaction>) -> DomainResult<Vec<Transaction>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        // A single multi-row INSERT is atomic: one bad row rejects them all.
        let mut qb = QueryBuilder::<Postgres>::new(
            "INSERT INTO transactions (user_id, description, amount, type, category, date) ",
        );
        qb.push_values(&batch, |mut row, new| {
            row.push_bind(new.user_id.as_uuid())
                .push_bind(new.values.description.as_str())
                .push_bind(new.values.amount)
                .push_bind(new.values.kind.as_str())
                .push_bind(new.values.category.as_str())
                .push_bind(new.values.date);
        });
        qb.push(" RETURNING ");
        qb.push(COLUMNS);

        let rows = qb
            .build_query_as::<TransactionRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn find_owned(
        &self,
        id: TransactionId,
        owner: UserId,
    ) -> DomainResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Transaction::try_from).transpose()
    }

    async fn update_owned(
        &self,
        id: TransactionId,
        owner: UserId,
        values: &TransactionValues,
    ) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE transactions
             SET description = $1, amount = $2, type = $3, category = $4, date = $5
             WHERE id = $6 AND user_id = $7",
        )
        .bind(values.description.as_str())
        .bind(values.amount)
        .bind(values.kind.as_str())
        .bind(values.category.as_str())
        .bind(values.date)
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete_owned(&self, id: TransactionId, owner: UserId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn list_owned(
        &self,
        owner: UserId,
        filter: TransactionFilter,
    ) -> DomainResult<Vec<Transaction>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM transactions WHERE user_id = "));
        builder.push_bind(owner.as_uuid());
        if let Some(from) = filter.from {
            builder.push(" AND date >= ");
            builder.push_bind(from);
        }
        if let Some(until) = filter.until {
            builder.push(" AND date < ");
            builder.push_bind(until);
        }
        builder.push(" ORDER BY date DESC, created_at DESC");
        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<TransactionRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Transaction::try_from).collect()
    }
}
