// src/models/mod.rs

pub mod audit;
pub mod question;
pub mod reminder;
pub mod report;
pub mod tip;
pub mod user;
