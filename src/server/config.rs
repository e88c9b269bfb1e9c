use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => value.parse::<Level>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            log_level,
        })
    }
}
