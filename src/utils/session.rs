// src/utils/session.rs

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, models::user::User, state::AppState};

/// Axum Middleware: Session.
///
/// Looks up the active session user. If there is one, injects the `User`
/// into the request extensions for handlers to use; otherwise 401.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    match state.identity.current_user() {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        None => Err(AppError::AuthError("Not logged in".to_string())),
    }
}

/// Axum Middleware: Admin Authorization.
///
/// Must be used AFTER `session_middleware`. 403 unless the session user is
/// the admin.
pub async fn admin_middleware(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<User>()
        .ok_or(AppError::AuthError("Not logged in".to_string()))?;

    if !user.level.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(req).await)
}
