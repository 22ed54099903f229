use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;

/// Origins the frontend is served from; used when CORS_ALLOWED_ORIGINS is unset.
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:5173",
    "https://lectur-recommendation.vercel.app",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// List of origins allowed credentialed cross-origin access
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        let allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(origins) => parse_origin_list(&origins),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        if allowed_origins.is_empty() {
            return Err(AppError::Configuration(
                "CORS_ALLOWED_ORIGINS must contain at least one origin".to_string(),
            ));
        }

        Ok(Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            cors: CorsConfig { allowed_origins },
        })
    }
}

/// Split a comma-separated origin list, dropping empty entries
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
