// src/content/mod.rs

//! Built-in, read-only content: default tips and the game pools.

pub mod quiz;
pub mod terms;
pub mod tips;
pub mod true_false;
