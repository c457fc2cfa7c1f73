// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod games;
pub mod reminders;
pub mod reports;
pub mod tips;
