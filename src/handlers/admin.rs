// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        report::UpdateReportStatusRequest,
        tip::CreateTipRequest,
        user::UserStats,
    },
    state::AppState,
};

/// Every tip, regardless of level.
/// Admin only.
pub async fn list_tips(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.tips.all())
}

/// Publishes a new tip.
/// Admin only.
pub async fn create_tip(
    State(state): State<AppState>,
    Json(payload): Json<CreateTipRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tip = state.tips.create(&payload)?;
    Ok((StatusCode::CREATED, Json(tip)))
}

pub async fn delete_tip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.tips.delete(&id)? {
        return Err(AppError::NotFound("Tip not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// All reports, including anonymous ones.
/// Admin only.
pub async fn list_reports(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.reports.all())
}

pub async fn update_report_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateReportStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let report = state
        .reports
        .set_status(&id, payload.status)?
        .ok_or(AppError::NotFound("Report not found".to_string()))?;
    Ok(Json(report))
}

/// Registered users. The admin identity is never part of the registry.
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.identity.registered_users())
}

/// User counts and level distribution.
pub async fn user_stats(State(state): State<AppState>) -> Json<UserStats> {
    Json(UserStats::from_users(&state.identity.registered_users()))
}

/// Audit trail, newest first.
pub async fn list_audit_logs(State(state): State<AppState>) -> impl IntoResponse {
    let mut entries = state.audit.entries();
    entries.reverse();
    Json(entries)
}
