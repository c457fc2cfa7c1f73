// src/utils/mod.rs

pub mod client;
pub mod clock;
pub mod hash;
pub mod html;
pub mod session;
