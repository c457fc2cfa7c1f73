// src/services/mod.rs

pub mod audit_log;
pub mod daily_selection;
pub mod identity;
pub mod reminders;
pub mod reports;
pub mod tips;

pub use audit_log::AuditLog;
pub use daily_selection::DailySelectionCache;
pub use identity::IdentityService;
pub use reminders::ReminderStore;
pub use reports::ReportStore;
pub use tips::TipStore;
