use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::games::GameBoard;
use crate::services::{
    AuditLog, DailySelectionCache, IdentityService, ReminderStore, ReportStore, TipStore,
};
use crate::store::KeyValueStore;
use crate::utils::clock::Clock;

/// Composition root: the one place that owns the store, the clock and every
/// service built on them. Handlers only ever see it through `State`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub identity: Arc<IdentityService>,
    pub audit: AuditLog,
    pub tips: TipStore,
    pub reports: ReportStore,
    pub reminders: ReminderStore,
    pub daily: DailySelectionCache,
    pub games: Arc<GameBoard>,
}

impl AppState {
    /// Builds every service. The admin password is moved out of `config`
    /// and only its hash is kept.
    pub fn new(
        mut config: Config,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppError> {
        let admin_password = std::mem::take(&mut config.admin_password);
        let audit = AuditLog::new(store.clone(), clock.clone());
        let identity = IdentityService::new(
            store.clone(),
            clock.clone(),
            audit.clone(),
            &config.admin_email,
            &admin_password,
        )?;

        Ok(Self {
            identity: Arc::new(identity),
            audit,
            tips: TipStore::new(store.clone(), clock.clone()),
            reports: ReportStore::new(store.clone(), clock.clone()),
            reminders: ReminderStore::new(store.clone(), clock.clone()),
            daily: DailySelectionCache::new(store, clock),
            games: Arc::new(GameBoard::default()),
            config,
        })
    }
}
