// src/application/queries/contracts.rs
use crate::{
    application::{
        dto::ContractDto,
        error::ApplicationResult,
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::contract::ContractRepository,
};
use std::sync::Arc;

pub struct ContractQueryService {
    repo: Arc<dyn ContractRepository>,
}

impl ContractQueryService {
    pub fn new(repo: Arc<dyn ContractRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, identity: &dyn IdentityProvider) -> ApplicationResult<Vec<ContractDto>> {
        let owner = require_owner(identity).await?;
        let contracts = self.repo.list_owned(owner).await?;
        Ok(contracts.into_iter().map(Into::into).collect())
    }
}
