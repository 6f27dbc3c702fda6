use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if the completion credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Empty means permissive CORS (`CORS_ALLOWED_ORIGINS=*`).
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

const DEFAULT_PORT: &str = "8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_MAX_UPLOAD_MB: &str = "10";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_upload_mb = lookup("MAX_UPLOAD_MB")
            .unwrap_or_else(|| DEFAULT_MAX_UPLOAD_MB.to_string())
            .parse::<usize>()
            .ok()
            .filter(|mb| *mb > 0)
            .context("MAX_UPLOAD_MB must be a positive integer")?;
        let max_upload_bytes = max_upload_mb
            .checked_mul(1024 * 1024)
            .context("MAX_UPLOAD_MB is too large")?;
        let cors_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string());

        Ok(Config {
            gemini_api_key: require(&lookup, "GEMINI_API_KEY")?,
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_allowed_origins: parse_origins(&cors_origins),
            max_upload_bytes,
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    if raw.trim() == "*" {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
