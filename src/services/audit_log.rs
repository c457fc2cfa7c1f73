// src/services/audit_log.rs

use std::sync::Arc;

use crate::error::AppError;
use crate::models::audit::{AuditAction, AuditLogEntry, ClientInfo};
use crate::models::user::UserLevel;
use crate::store::{KeyValueStore, keys, load_collection, save_collection};
use crate::utils::clock::Clock;

/// Only the most recent entries are retained.
pub const AUDIT_LOG_CAPACITY: usize = 1000;

/// Append-only record of authentication events.
#[derive(Clone)]
pub struct AuditLog {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl AuditLog {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Appends one event, discarding the oldest entries beyond
    /// [`AUDIT_LOG_CAPACITY`].
    pub fn record(
        &self,
        action: AuditAction,
        user_email: &str,
        user_level: Option<UserLevel>,
        client: &ClientInfo,
    ) -> Result<AuditLogEntry, AppError> {
        let entry = AuditLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: self.clock.now(),
            action,
            user_email: user_email.to_string(),
            user_level,
            ip_address: client.ip_address.clone(),
            user_agent: client.user_agent.clone(),
        };

        let mut entries = self.entries();
        entries.push(entry.clone());
        if entries.len() > AUDIT_LOG_CAPACITY {
            let excess = entries.len() - AUDIT_LOG_CAPACITY;
            entries.drain(..excess);
        }
        save_collection(self.store.as_ref(), keys::AUDIT_LOGS, &entries)?;

        tracing::info!(action = ?action, email = %user_email, "Audit log entry created");
        Ok(entry)
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> Vec<AuditLogEntry> {
        load_collection(self.store.as_ref(), keys::AUDIT_LOGS).unwrap_or_default()
    }
}
