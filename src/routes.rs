// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, games, reminders, reports, tips},
    state::AppState,
    utils::session::{admin_middleware, session_middleware},
};

/// Assembles the main application router.
///
/// * Public: login, register, logout.
/// * Session: everything a logged-in user does.
/// * Admin: session check first, then the level check.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .merge(
            Router::new()
                .route("/me", get(auth::me))
                .route("/profile", put(auth::update_profile))
                .layer(middleware::from_fn_with_state(state.clone(), session_middleware)),
        );

    let user_routes = Router::new()
        .route("/tips", get(tips::list_tips))
        .route("/reports", post(reports::submit_report))
        .route("/reports/mine", get(reports::my_reports))
        .route(
            "/reminders",
            get(reminders::list_reminders).post(reminders::create_reminder),
        )
        .route(
            "/reminders/{id}",
            put(reminders::update_reminder).delete(reminders::delete_reminder),
        )
        .route("/reminders/{id}/toggle", post(reminders::toggle_reminder))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    let game_routes = Router::new()
        .route("/quiz", get(games::get_quiz))
        .route("/quiz/start", post(games::start_quiz))
        .route("/quiz/answer", post(games::answer_quiz))
        .route("/quiz/next", post(games::next_quiz))
        .route("/quiz/play-again", post(games::play_again_quiz))
        .route("/true-false", get(games::get_true_false))
        .route("/true-false/start", post(games::start_true_false))
        .route("/true-false/answer", post(games::answer_true_false))
        .route("/true-false/next", post(games::next_true_false))
        .route("/true-false/play-again", post(games::play_again_true_false))
        .route("/matching", get(games::get_matching))
        .route("/matching/start", post(games::start_matching))
        .route("/matching/place", post(games::place_match))
        .route("/matching/submit", post(games::submit_matching))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    let admin_routes = Router::new()
        .route("/tips", get(admin::list_tips).post(admin::create_tip))
        .route("/tips/{id}", delete(admin::delete_tip))
        .route("/reports", get(admin::list_reports))
        .route("/reports/{id}/status", put(admin::update_report_status))
        .route("/users", get(admin::list_users))
        .route("/stats", get(admin::user_stats))
        .route("/audit-logs", get(admin::list_audit_logs))
        // Layers run outside in: session first, then the admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/games", game_routes)
        .nest("/admin", admin_routes)
        .merge(user_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
