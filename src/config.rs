// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Number of items drawn per game session unless overridden.
pub const DEFAULT_DAILY_QUESTION_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persistent store document.
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    /// The single hardcoded credential pair that maps to the admin identity.
    pub admin_email: String,
    pub admin_password: String,
    pub daily_question_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");

        let admin_password = env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

        let daily_question_limit = env::var("DAILY_QUESTION_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|k: &usize| *k > 0)
            .unwrap_or(DEFAULT_DAILY_QUESTION_LIMIT);

        Self {
            data_dir,
            bind_addr,
            rust_log,
            admin_email,
            admin_password,
            daily_question_limit,
        }
    }
}
