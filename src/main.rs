// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use privacypal::config::Config;
use privacypal::routes;
use privacypal::state::AppState;
use privacypal::store::FileStore;
use privacypal::utils::clock::SystemClock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let store = FileStore::open(&config.data_dir).expect("Failed to open data store");
    tracing::info!("Data store opened at {}", config.data_dir.display());

    let addr = config.bind_addr;
    let state = AppState::new(config, Arc::new(store), Arc::new(SystemClock))
        .expect("Failed to initialize application state");

    let app = routes::create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listening address");

    axum::serve(listener, app).await.expect("Server error");
}
