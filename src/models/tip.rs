// src/models/tip.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipCategory {
    PasswordSecurity,
    MobileSecurity,
    WifiSafety,
    SocialEngineering,
    OfficeSafety,
    DataProtection,
}

/// A security tip, targeted at one or more content tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    /// Tiers allowed to see this tip. Admins see every tip.
    pub level: BTreeSet<UserLevel>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Tip {
    pub fn visible_to(&self, level: UserLevel) -> bool {
        level.is_admin() || self.level.contains(&level)
    }
}

/// DTO for an admin creating a tip.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTipRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    pub category: TipCategory,
    #[validate(length(min = 1, message = "At least one level is required."))]
    pub level: Vec<UserLevel>,
}

/// Query parameters for listing tips.
#[derive(Debug, Default, Deserialize)]
pub struct TipListParams {
    pub category: Option<TipCategory>,
}
