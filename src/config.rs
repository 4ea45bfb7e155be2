use std::env;
use std::path::Path;

use thiserror::Error;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_SPLINE_SCENE_URL: &str = "https://prod.spline.design/8fw9Z-c-rqW3nWBN/scene.splinecode";
pub const BRAND_NAME: &str = "Mintly Wash";
pub const SESSION_COOKIE: &str = "mintly_session";
pub const SESSION_IDLE_MINUTES: i64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BACKEND_URL is not configured")]
    MissingBackendUrl,
    #[error("BACKEND_URL must start with http:// or https:// (got {0})")]
    InvalidBackendUrl(String),
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_backend_url() -> String {
    sanitize_base_url(&env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()))
}

/// Canonical public URL of the landing page. Empty means "derive from the bind address".
pub fn get_public_base_url() -> String {
    let raw = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string());
    raw.trim().trim_end_matches('/').to_string()
}

pub fn get_spline_scene_url() -> String {
    let raw = env::var("SPLINE_SCENE_URL").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_SPLINE_SCENE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BACKEND_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Checks that a backend URL is usable before any request is attempted.
pub fn validate_backend_url(url: &str) -> Result<(), ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::MissingBackendUrl);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(url.to_string()));
    }
    Ok(())
}
