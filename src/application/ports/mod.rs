// src/application/ports/mod.rs
pub mod identity;
pub mod notify;
pub mod security;
pub mod time;
pub mod views;

