// src/models/user.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity id of the built-in administrator. Never stored in the registry.
pub const ADMIN_USER_ID: &str = "admin";

/// Access tier. `Admin` is a role, not a content tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserLevel {
    Entry,
    Mid,
    Top,
    Admin,
}

impl UserLevel {
    /// The tiers a tip may target.
    pub const CONTENT_TIERS: [UserLevel; 3] = [UserLevel::Entry, UserLevel::Mid, UserLevel::Top];

    pub fn is_admin(self) -> bool {
        self == UserLevel::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserLevel::Entry => "entry",
            UserLevel::Mid => "mid",
            UserLevel::Top => "top",
            UserLevel::Admin => "admin",
        }
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user, or the admin identity.
///
/// Serialized camelCase to match the persisted record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique across the registry.
    pub email: String,
    pub level: UserLevel,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Share of registered users per tier, rounded to whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub entry: u32,
    pub mid: u32,
    pub top: u32,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        let total = users.len();
        let percent = |level: UserLevel| -> u32 {
            if total == 0 {
                return 0;
            }
            let count = users.iter().filter(|u| u.level == level).count();
            ((count as f64 / total as f64) * 100.0).round() as u32
        };

        Self {
            total,
            entry: percent(UserLevel::Entry),
            mid: percent(UserLevel::Mid),
            top: percent(UserLevel::Top),
        }
    }
}

/// DTO for registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    /// Captured but never compared for registered users (see `IdentityService::login`).
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password length must be between 6 and 128 characters."
    ))]
    pub password: String,
    pub level: UserLevel,
}

/// DTO for user login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// DTO for editing the current user's profile. Fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
