// src/application/queries/transactions.rs
use crate::{
    application::{
        dto::TransactionDto,
        error::ApplicationResult,
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::transaction::{TransactionFilter, TransactionRepository},
};
use chrono::NaiveDate;
use std::sync::Arc;

pub const DEFAULT_RECENT_LIMIT: u32 = 10;

pub struct TransactionQueryService {
    repo: Arc<dyn TransactionRepository>,
}

/// `until` is exclusive. Both bounds absent lists everything.
#[derive(Debug, Default)]
pub struct ListTransactionsQuery {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl TransactionQueryService {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    pub async fn recent(
        &self,
        identity: &dyn IdentityProvider,
        limit: Option<u32>,
    ) -> ApplicationResult<Vec<TransactionDto>> {
        let owner = require_owner(identity).await?;
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_RECENT_LIMIT);
        let items = self
            .repo
            .list_owned(owner, TransactionFilter::recent(limit))
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn list(
        &self,
        identity: &dyn IdentityProvider,
        query: ListTransactionsQuery,
    ) -> ApplicationResult<Vec<TransactionDto>> {
        let owner = require_owner(identity).await?;
        let filter = TransactionFilter {
            from: query.from,
            until: query.until,
            limit: query.limit,
        };
        let items = self.repo.list_owned(owner, filter).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
