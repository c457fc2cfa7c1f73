// src/handlers/auth.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        audit::ClientInfo,
        user::{LoginRequest, RegisterRequest, UpdateProfileRequest, User},
    },
    state::AppState,
};

/// Registers a new user and opens a session for them. Games left by the
/// previous session user are discarded.
///
/// Returns 201 Created and the user, or 409 if the email is taken.
pub async fn register(
    State(state): State<AppState>,
    client: ClientInfo,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state
        .identity
        .register(&payload, &client)?
        .ok_or_else(|| AppError::Conflict(format!("Email '{}' already exists", payload.email.trim())))?;
    state.games.clear();

    Ok((StatusCode::CREATED, Json(user)))
}

/// Logs in with email and password.
///
/// The admin pair is verified; for registered users only the email is
/// checked (see `IdentityService::login`).
pub async fn login(
    State(state): State<AppState>,
    client: ClientInfo,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state
        .identity
        .login(&payload.email, &payload.password, &client)?
        .ok_or(AppError::AuthError("Invalid email or password".to_string()))?;
    state.games.clear();

    Ok(Json(user))
}

pub async fn logout(
    State(state): State<AppState>,
    client: ClientInfo,
) -> Result<impl IntoResponse, AppError> {
    let user = state.identity.logout(&client)?;
    state.games.clear();

    Ok(Json(json!({
        "logged_out": user.is_some(),
    })))
}

/// Current session user.
pub async fn me(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state.identity.update_profile(&payload)?;
    Ok(Json(user))
}
