use crate::domain::errors::DomainResult;
use crate::domain::transaction::entity::{NewTransaction, Transaction, TransactionValues};
use crate::domain::transaction::value_objects::TransactionId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Date window and row cap for owner-scoped listings. `until` is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn recent(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn between(from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self {
            from,
            until,
            limit: None,
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.until.is_none_or(|until| date < until)
    }
}

/// Every method is scoped to `owner`; rows of other owners are invisible.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn insert(&self, transaction: NewTransaction) -> DomainResult<Transaction>;

    /// All rows are written or none are.
    async fn insert_batch(&self, batch: Vec<NewTransaction>) -> DomainResult<Vec<Transaction>>;

    async fn find_owned(
        &self,
        id: TransactionId,
        owner: UserId,
    ) -> DomainResult<Option<Transaction>>;

    /// Returns the number of rows touched.
    async fn update_owned(
        &self,
        id: TransactionId,
        owner: UserId,
        values: &TransactionValues,
    ) -> DomainResult<u64>;

    /// Returns the number of rows removed.
    async fn delete_owned(&self, id: TransactionId, owner: UserId) -> DomainResult<u64>;

    /// Newest date first.
    async fn list_owned(
        &self,
        owner: UserId,
        filter: TransactionFilter,
    ) -> DomainResult<Vec<Transaction>>;
}
