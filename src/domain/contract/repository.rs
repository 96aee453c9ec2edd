use crate::domain::contract::entity::{Contract, ContractValues, NewContract};
use crate::domain::contract::value_objects::ContractId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn insert(&self, contract: NewContract) -> DomainResult<Contract>;

    async fn find_owned(&self, id: ContractId, owner: UserId) -> DomainResult<Option<Contract>>;

    async fn update_owned(
        &self,
        id: ContractId,
        owner: UserId,
        values: &ContractValues,
    ) -> DomainResult<u64>;

    async fn delete_owned(&self, id: ContractId, owner: UserId) -> DomainResult<u64>;

    /// Newest first.
    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Contract>>;
}
