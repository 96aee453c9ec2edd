pub mod database;
pub mod notify;
pub mod repositories;
pub mod security;
pub mod time;
pub mod views;
