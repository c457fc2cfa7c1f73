// src/store/keys.rs

pub const SESSION_USER: &str = "privacypal_user";
pub const USERS: &str = "privacypal_users";
pub const TIPS: &str = "privacypal_tips";
pub const REPORTS: &str = "privacypal_reports";
pub const AUDIT_LOGS: &str = "privacypal_audit_logs";

const REMINDERS_PREFIX: &str = "privacypal_reminders_";

/// Reminders are stored per owner.
pub fn reminders(user_id: &str) -> String {
    format!("{REMINDERS_PREFIX}{user_id}")
}
