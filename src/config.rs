// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Which backing store the process talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Local file-backed SQLite database (development).
    Sqlite { path: String },
    /// Remote managed Postgres database (production).
    Postgres { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub seed_sample_data: bool,
    pub log_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string());

        let storage = if app_env.eq_ignore_ascii_case("production") {
            let url = env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set when APP_ENV=production");
            StorageConfig::Postgres { url }
        } else {
            let path = env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "kindness-network.db".to_string());
            StorageConfig::Sqlite { path }
        };

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid port number");

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string());

        let seed_sample_data = env::var("SEED_SAMPLE_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            storage,
            host,
            port,
            static_dir,
            seed_sample_data,
            log_dir,
            rust_log,
        }
    }

    /// Configuration for an in-memory SQLite database, used by tests.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageConfig::Sqlite {
                path: ":memory:".to_string(),
            },
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "static".to_string(),
            seed_sample_data: false,
            log_dir: "logs".to_string(),
            rust_log: "error".to_string(),
        }
    }

    /// Browser origins allowed by CORS: the local aliases on the configured
    /// port, plus the bound host itself when it is a concrete name.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![
            format!("http://localhost:{}", self.port),
            format!("http://127.0.0.1:{}", self.port),
        ];
        let host = self.host.as_str();
        if !matches!(host, "0.0.0.0" | "::" | "localhost" | "127.0.0.1") {
            origins.push(format!("http://{}:{}", host, self.port));
        }
        origins
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
