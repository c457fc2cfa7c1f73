// src/content/tips.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::tip::{Tip, TipCategory};
use crate::models::user::UserLevel;

use TipCategory::*;
use UserLevel::{Entry, Mid, Top};

const DEFAULT_TIPS: &[(&str, &str, &str, TipCategory, &[UserLevel])] = &[
    (
        "1",
        "Use Strong, Unique Passwords",
        "Create passwords with at least 12 characters, including uppercase, lowercase, numbers, and symbols. Use a different password for each account.",
        PasswordSecurity,
        &[Entry, Mid, Top],
    ),
    (
        "2",
        "Enable Two-Factor Authentication",
        "Add an extra layer of security by enabling 2FA on all your important accounts. Use authenticator apps instead of SMS when possible.",
        PasswordSecurity,
        &[Entry, Mid, Top],
    ),
    (
        "3",
        "Keep Your Phone Updated",
        "Always install security updates and patches for your mobile device. Enable automatic updates for critical security fixes.",
        MobileSecurity,
        &[Entry, Mid, Top],
    ),
    (
        "4",
        "Avoid Public Wi-Fi for Sensitive Tasks",
        "Never access banking, shopping, or other sensitive accounts on public Wi-Fi. Use your mobile data or a VPN instead.",
        WifiSafety,
        &[Entry, Mid],
    ),
    (
        "5",
        "Recognize Phishing Emails",
        "Be suspicious of urgent requests, spelling errors, or unexpected attachments. Verify sender identity through a separate channel.",
        SocialEngineering,
        &[Entry, Mid, Top],
    ),
    (
        "6",
        "Lock Your Screen",
        "Always lock your computer screen when stepping away, even briefly. Use Windows+L or Cmd+Ctrl+Q shortcuts.",
        OfficeSafety,
        &[Entry, Mid],
    ),
    (
        "7",
        "Review App Permissions",
        "Regularly check what permissions your mobile apps have. Revoke access for apps that don't need certain permissions.",
        MobileSecurity,
        &[Mid, Top],
    ),
    (
        "8",
        "Use WPA3 Encryption",
        "Configure your home Wi-Fi with WPA3 encryption. If not available, use WPA2. Never use WEP or open networks.",
        WifiSafety,
        &[Mid, Top],
    ),
];

/// The tips served before any admin edit, stamped with `created_at`.
pub fn default_tips(created_at: DateTime<Utc>) -> Vec<Tip> {
    DEFAULT_TIPS
        .iter()
        .map(|(id, title, content, category, levels)| Tip {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: *category,
            level: levels.iter().copied().collect::<BTreeSet<_>>(),
            created_at,
        })
        .collect()
}
