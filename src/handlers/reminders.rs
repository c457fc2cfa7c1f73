// src/handlers/reminders.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        reminder::{CreateReminderRequest, UpdateReminderRequest},
        user::User,
    },
    state::AppState,
};

pub async fn list_reminders(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    Json(state.reminders.list(&user.id))
}

pub async fn create_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateReminderRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let reminder = state.reminders.create(&user.id, &payload)?;
    Ok((StatusCode::CREATED, Json(reminder)))
}

pub async fn update_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReminderRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let reminder = state
        .reminders
        .update(&user.id, &id, &payload)?
        .ok_or(AppError::NotFound("Reminder not found".to_string()))?;
    Ok(Json(reminder))
}

/// Flips the completed flag.
pub async fn toggle_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reminder = state
        .reminders
        .toggle(&user.id, &id)?
        .ok_or(AppError::NotFound("Reminder not found".to_string()))?;
    Ok(Json(reminder))
}

pub async fn delete_reminder(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.reminders.delete(&user.id, &id)? {
        return Err(AppError::NotFound("Reminder not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
