use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, ProfileUpdate, User},
    value_objects::{Email, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User>;
}
