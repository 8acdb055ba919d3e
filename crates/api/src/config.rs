use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use kaylari_core::auth::{hash_password, AuthError};
use kaylari_core::DEFAULT_STORAGE_KEY;

const DEV_ADMIN_PASSWORD: &str = "dev-password-change-me";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("could not hash ADMIN_PASSWORD: {0}")]
    AdminPassword(#[from] AuthError),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Directory holding the persisted content blob.
    pub content_dir: PathBuf,
    /// Storage key the site content is saved under.
    pub storage_key: String,
    /// Argon2 PHC hash of the admin password.
    pub admin_password_hash: String,
    /// JWT signing secret for admin sessions.
    pub jwt_secret: String,
    /// Lifetime of an admin session token, in seconds.
    pub session_ttl_secs: u64,
    /// Event bus channel capacity.
    pub event_bus_capacity: usize,
    /// Largest accepted request body; image uploads arrive as data URIs.
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// `ADMIN_PASSWORD_HASH` takes precedence; otherwise `ADMIN_PASSWORD` is
    /// hashed at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_password_hash = match env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
                    tracing::warn!("ADMIN_PASSWORD not set, using the development password");
                    DEV_ADMIN_PASSWORD.to_string()
                });
                hash_password(&password)?
            }
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 3030)?,
            content_dir: env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            storage_key: env::var("STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),
            admin_password_hash,
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me-in-production".to_string()),
            session_ttl_secs: parse_var("SESSION_TTL_SECS", 8 * 60 * 60)?,
            event_bus_capacity: parse_var("EVENT_BUS_CAPACITY", 1024)?,
            max_body_bytes: parse_var("MAX_BODY_BYTES", 16 * 1024 * 1024)?,
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
