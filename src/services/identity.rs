// src/services/identity.rs

use std::sync::Arc;

use crate::error::AppError;
use crate::models::audit::{AuditAction, ClientInfo};
use crate::models::user::{ADMIN_USER_ID, RegisterRequest, UpdateProfileRequest, User, UserLevel};
use crate::store::{KeyValueStore, keys, load_collection, load_value, save_collection, save_value};
use crate::utils::clock::Clock;
use crate::utils::hash::{hash_password, verify_password};

use super::audit_log::AuditLog;

/// Owns the single active session and the registry of users.
///
/// Every login, registration and logout goes through here so the session key
/// and the audit log never drift apart.
pub struct IdentityService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    audit: AuditLog,
    admin_email: String,
    admin_password_hash: String,
}

impl IdentityService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        audit: AuditLog,
        admin_email: &str,
        admin_password: &str,
    ) -> Result<Self, AppError> {
        Ok(Self {
            store,
            clock,
            audit,
            admin_email: admin_email.trim().to_string(),
            admin_password_hash: hash_password(admin_password)?,
        })
    }

    /// The session user, if any. A corrupt session record reads as logged out.
    pub fn current_user(&self) -> Option<User> {
        load_value(self.store.as_ref(), keys::SESSION_USER)
    }

    pub fn registered_users(&self) -> Vec<User> {
        load_collection(self.store.as_ref(), keys::USERS).unwrap_or_default()
    }

    /// Authenticates and opens a session.
    ///
    /// The admin pair is checked first. Any other email is looked up in the
    /// registry and, if present, logged in WITHOUT comparing the password:
    /// registered users carry no stored credential. Whether a comparison was
    /// meant to exist is unresolved; the behavior is kept deliberately.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        client: &ClientInfo,
    ) -> Result<Option<User>, AppError> {
        let email = email.trim();
        self.audit_event(AuditAction::LoginAttempt, email, None, client);

        if email == self.admin_email && verify_password(password, &self.admin_password_hash)? {
            let admin = self.admin_identity();
            self.open_session(&admin)?;
            self.audit_event(AuditAction::LoginSuccess, email, Some(UserLevel::Admin), client);
            tracing::info!("Admin logged in");
            return Ok(Some(admin));
        }

        match self.registered_users().into_iter().find(|u| u.email == email) {
            Some(user) => {
                self.open_session(&user)?;
                self.audit_event(AuditAction::LoginSuccess, email, Some(user.level), client);
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(Some(user))
            }
            None => {
                self.audit_event(AuditAction::LoginFailure, email, None, client);
                tracing::info!("Login failed for unknown email");
                Ok(None)
            }
        }
    }

    /// Registers a user and logs them in. `Ok(None)` if the email is taken.
    pub fn register(
        &self,
        request: &RegisterRequest,
        client: &ClientInfo,
    ) -> Result<Option<User>, AppError> {
        if request.level.is_admin() {
            return Err(AppError::BadRequest(
                "Registration is limited to entry, mid and top levels".to_string(),
            ));
        }

        let email = request.email.trim();
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let mut users = self.registered_users();
        if users.iter().any(|u| u.email == email) || email == self.admin_email {
            tracing::info!("Registration rejected: email already registered");
            return Ok(None);
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            level: request.level,
            created_at: self.clock.now(),
        };

        users.push(user.clone());
        save_collection(self.store.as_ref(), keys::USERS, &users)?;
        self.open_session(&user)?;
        self.audit_event(AuditAction::LoginSuccess, email, Some(user.level), client);

        tracing::info!(user_id = %user.id, level = %user.level, "User registered");
        Ok(Some(user))
    }

    /// Closes the session. Returns the user that was logged out, if any.
    pub fn logout(&self, client: &ClientInfo) -> Result<Option<User>, AppError> {
        let user = self.current_user();
        if let Some(user) = &user {
            self.audit_event(AuditAction::Logout, &user.email, Some(user.level), client);
        }
        self.store.remove(keys::SESSION_USER)?;
        Ok(user)
    }

    /// Edits the session user's name and/or email.
    ///
    /// Registered users are updated in the registry too. The admin identity
    /// lives only in the session, so only the session copy changes.
    pub fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, AppError> {
        let mut user = self
            .current_user()
            .ok_or(AppError::AuthError("Not logged in".to_string()))?;

        if let Some(name) = request.name.as_deref().map(str::trim) {
            if name.is_empty() {
                return Err(AppError::BadRequest("Name cannot be empty".to_string()));
            }
            user.name = name.to_string();
        }
        if let Some(email) = request.email.as_deref().map(str::trim) {
            user.email = email.to_string();
        }

        if user.id != ADMIN_USER_ID {
            let mut users = self.registered_users();
            if users.iter().any(|u| u.email == user.email && u.id != user.id) {
                return Err(AppError::Conflict(format!(
                    "Email '{}' is already registered",
                    user.email
                )));
            }
            match users.iter_mut().find(|u| u.id == user.id) {
                Some(slot) => *slot = user.clone(),
                None => {
                    tracing::warn!(user_id = %user.id, "Session user missing from registry, re-adding");
                    users.push(user.clone());
                }
            }
            save_collection(self.store.as_ref(), keys::USERS, &users)?;
        }

        self.open_session(&user)?;
        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    fn admin_identity(&self) -> User {
        User {
            id: ADMIN_USER_ID.to_string(),
            name: "Admin".to_string(),
            email: self.admin_email.clone(),
            level: UserLevel::Admin,
            created_at: self.clock.now(),
        }
    }

    fn open_session(&self, user: &User) -> Result<(), AppError> {
        save_value(self.store.as_ref(), keys::SESSION_USER, user)
    }

    /// Audit failures never block authentication.
    fn audit_event(
        &self,
        action: AuditAction,
        email: &str,
        level: Option<UserLevel>,
        client: &ClientInfo,
    ) {
        if let Err(e) = self.audit.record(action, email, level, client) {
            tracing::warn!("Failed to write audit entry: {}", e);
        }
    }
}
