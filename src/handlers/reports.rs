// src/handlers/reports.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::{report::CreateReportRequest, user::User},
    state::AppState,
};

/// Files an incident report, optionally anonymous.
pub async fn submit_report(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let report = state.reports.submit(&user, &payload)?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// The session user's own, non-anonymous reports.
pub async fn my_reports(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    Json(state.reports.mine(&user.id))
}
