//! # Client Configuration Module
//!
//! Loads the settings the Courtbook client needs from environment variables,
//! with defaults where a sensible one exists.
//!
//! ## Environment Variables
//!
//! - `COURTBOOK_API_URL`: Base URL of the booking API (required)
//! - `COURTBOOK_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 15)
//! - `COURTBOOK_SESSION_DIR`: Directory the session is persisted in (default: ".courtbook")
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, WrapErr, eyre};
use tracing::Level;

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_SESSION_DIR: &str = ".courtbook";

/// Configuration for the Courtbook client
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use courtbook_client::config::ClientConfig;
///
/// fn example() -> Result<()> {
///     let config = ClientConfig::from_env()?;
///     println!("Talking to {}", config.api_base_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without a trailing slash
    pub api_base_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Where the session file lives
    pub session_dir: PathBuf,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the API URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            log_level: Level::INFO,
        }
    }

    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `COURTBOOK_API_URL` is not set or is not an http(s) URL
    /// - `COURTBOOK_REQUEST_TIMEOUT_SECONDS` is set but is not a positive integer
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("COURTBOOK_API_URL")
            .wrap_err("COURTBOOK_API_URL environment variable must be set")?;
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(eyre!(
                "COURTBOOK_API_URL must start with http:// or https://, got {}",
                api_base_url
            ));
        }

        let request_timeout = match env::var("COURTBOOK_REQUEST_TIMEOUT_SECONDS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        let session_dir = env::var("COURTBOOK_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_DIR));

        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url),
            request_timeout,
            session_dir,
            log_level,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Joins a request path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

pub fn parse_timeout(raw: &str) -> Result<u64> {
    let seconds: u64 = raw
        .trim()
        .parse()
        .wrap_err("Invalid COURTBOOK_REQUEST_TIMEOUT_SECONDS value")?;
    if seconds == 0 {
        return Err(eyre!("COURTBOOK_REQUEST_TIMEOUT_SECONDS must be greater than zero"));
    }
    Ok(seconds)
}

pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
