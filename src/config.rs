//! Application configuration loaded from environment variables.
//!
//! Cloud Run injects secrets as environment variables via secret bindings,
//! so everything is read from the process environment once at startup.

use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// Largest accepted calendar offset from UTC, exclusive (one day).
const MAX_OFFSET_MINUTES: u32 = 24 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Offset from UTC (minutes) of the calendar used to bucket reading days
    pub streak_utc_offset_minutes: i32,

    // --- Secrets ---
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            streak_utc_offset_minutes: 0,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            streak_utc_offset_minutes: parse_offset_minutes(
                env::var("STREAK_UTC_OFFSET_MINUTES").ok().as_deref(),
            )?,
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
        })
    }

    /// Calendar offset used when truncating reading timestamps to days.
    pub fn streak_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.streak_utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

/// Parse `STREAK_UTC_OFFSET_MINUTES`, defaulting to UTC when unset.
fn parse_offset_minutes(raw: Option<&str>) -> Result<i32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(0);
    };

    let minutes: i32 = raw.trim().parse().map_err(|_| {
        ConfigError::Invalid("STREAK_UTC_OFFSET_MINUTES", format!("not an integer: {raw}"))
    })?;

    if minutes.unsigned_abs() >= MAX_OFFSET_MINUTES {
        return Err(ConfigError::Invalid(
            "STREAK_UTC_OFFSET_MINUTES",
            format!("{minutes} is not within one day of UTC"),
        ));
    }

    Ok(minutes)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
