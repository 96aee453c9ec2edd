use crate::domain::employee::entity::{Employee, EmployeeValues, NewEmployee};
use crate::domain::employee::value_objects::EmployeeId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn insert(&self, employee: NewEmployee) -> DomainResult<Employee>;

    async fn find_owned(&self, id: EmployeeId, owner: UserId) -> DomainResult<Option<Employee>>;

    async fn update_owned(
        &self,
        id: EmployeeId,
        owner: UserId,
        values: &EmployeeValues,
    ) -> DomainResult<u64>;

    async fn delete_owned(&self, id: EmployeeId, owner: UserId) -> DomainResult<u64>;

    /// Newest hire record first.
    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Employee>>;
}
