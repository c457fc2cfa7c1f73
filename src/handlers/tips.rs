// src/handlers/tips.rs

use axum::{
    Extension, Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    models::{tip::TipListParams, user::User},
    state::AppState,
};

/// Tips visible at the session user's level, optionally by category.
pub async fn list_tips(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(params): Query<TipListParams>,
) -> impl IntoResponse {
    Json(state.tips.visible_to(user.level, params.category))
}
