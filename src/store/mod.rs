// src/store/mod.rs

//! Durable string-keyed storage shared by every service.
//!
//! Values are JSON documents. Readers never fail on bad data: anything that
//! does not parse is treated as absent (see [`collection`]).

pub mod collection;
pub mod file;
pub mod keys;
pub mod memory;

pub use collection::{load_collection, load_value, save_collection, save_value};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AppError;

/// Synchronous key-value capability.
///
/// Every `set`/`remove` is atomic with respect to other calls on the same
/// store. Read-modify-write sequences spanning several calls are not; the
/// last writer wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn remove(&self, key: &str) -> Result<(), AppError>;
}
