use once_cell::sync::Lazy;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Database
    pub database_url: String,

    /// Base64-encoded JSON mapping of operator username to password.
    /// Absent or malformed means no operator can authenticate.
    pub auth_secret: Option<String>,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("SRPUSH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SRPUSH_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            database_url: env::var("SRPUSH_DATABASE_URL")
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or_else(|_| "postgres://hurley@localhost/srpush".to_string()),

            auth_secret: env::var("SRPUSH_AUTH").ok().filter(|s| !s.is_empty()),

            log_level: env::var("SRPUSH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
