use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

/// Port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 5001;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Origins allowed to send credentialed cross-site requests. Empty means permissive CORS.
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_port(std::env::var("PORT").ok())?,
            cors_allowed_origins: parse_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok())?,
        })
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value,
        }),
    }
}

fn parse_origins(value: Option<String>) -> Result<Vec<HeaderValue>, ConfigError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
            })
        })
        .collect()
}
