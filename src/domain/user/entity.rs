// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, FullName, PasswordHash, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub full_name: FullName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn rename(&mut self, full_name: FullName, now: DateTime<Utc>) {
        self.full_name = full_name;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub full_name: FullName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: UserId,
    pub full_name: FullName,
    pub updated_at: DateTime<Utc>,
}
