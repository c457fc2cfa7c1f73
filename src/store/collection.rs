// src/store/collection.rs

//! Versioned, self-healing JSON records on top of [`KeyValueStore`].
//!
//! Collections are written as `{"version": 1, "items": [...]}`. On read, a
//! bare array is accepted as version 1, items that fail to deserialize are
//! dropped one by one, and anything else (missing key, bad JSON, unknown
//! version) reads as absent.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::AppError;

use super::KeyValueStore;

pub const SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u64,
    items: &'a [T],
}

/// Reads a collection. `None` means "never written or unusable"; callers
/// pick their own default.
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Option<Vec<T>> {
    let raw = store.get(key)?;

    let value: Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Discarding unparsable collection '{}': {}", key, e);
            return None;
        }
    };

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => {
            let version = envelope.get("version").and_then(Value::as_u64);
            if version != Some(SCHEMA_VERSION) {
                tracing::warn!(
                    "Discarding collection '{}' with unsupported version {:?}",
                    key,
                    version
                );
                return None;
            }
            match envelope.remove("items") {
                Some(Value::Array(items)) => items,
                _ => {
                    tracing::warn!("Discarding collection '{}' without an items array", key);
                    return None;
                }
            }
        }
        _ => {
            tracing::warn!("Discarding collection '{}': not an array or envelope", key);
            return None;
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Dropping invalid record in '{}': {}", key, e);
                None
            }
        })
        .collect();

    if records.len() != total {
        tracing::debug!("Kept {}/{} records of '{}'", records.len(), total, key);
    }

    Some(records)
}

pub fn save_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), AppError> {
    let envelope = Envelope {
        version: SCHEMA_VERSION,
        items,
    };
    let raw = serde_json::to_string(&envelope)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    store.set(key, &raw)
}

/// Reads a single JSON value; any parse failure reads as absent.
pub fn load_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed value under '{}': {}", key, e);
            None
        }
    }
}

pub fn save_value<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw =
        serde_json::to_string(value).map_err(|e| AppError::InternalServerError(e.to_string()))?;
    store.set(key, &raw)
}
