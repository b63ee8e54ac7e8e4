//! Runtime configuration read from environment variables.
//!
//! | Variable                | Default                                   |
//! |-------------------------|-------------------------------------------|
//! | `HOST`                  | `0.0.0.0`                                 |
//! | `PORT`                  | `8080`                                    |
//! | `DATA_BASE_URL`         | `http://127.0.0.1:5000`                   |
//! | `NAME_BASE_URL`         | `https://api.ashcon.app/mojang/v2/user`   |
//! | `REFRESH_INTERVAL_SECS` | `5`                                       |
//! | `FETCH_ATTEMPTS`        | `3`                                       |
//! | `FETCH_DELAY_MS`        | `1000`                                    |
//! | `REQUEST_TIMEOUT_SECS`  | `10`                                      |

use crate::remote::{Endpoints, RetryPolicy, DEFAULT_DATA_BASE, DEFAULT_NAME_BASE};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_REFRESH_SECS: u64 = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "Invalid value for {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub endpoints: Endpoints,
    /// Period of each of the three timers (discovery, reload, scoreboard).
    pub refresh_interval: Duration,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            endpoints: Endpoints::default(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("HOST").unwrap_or(defaults.host);
        let port = parse(&get, "PORT")?.unwrap_or(defaults.port);
        let data_base = get("DATA_BASE_URL").unwrap_or_else(|| DEFAULT_DATA_BASE.to_string());
        let name_base = get("NAME_BASE_URL").unwrap_or_else(|| DEFAULT_NAME_BASE.to_string());
        let refresh_secs: u64 = parse(&get, "REFRESH_INTERVAL_SECS")?.unwrap_or(DEFAULT_REFRESH_SECS);
        let attempts: u32 = parse(&get, "FETCH_ATTEMPTS")?.unwrap_or(defaults.retry.max_attempts);
        let delay_ms: Option<u64> = parse(&get, "FETCH_DELAY_MS")?;
        let timeout_secs: u64 = parse(&get, "REQUEST_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        if refresh_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REFRESH_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            endpoints: Endpoints::new(data_base, name_base),
            refresh_interval: Duration::from_secs(refresh_secs),
            retry: RetryPolicy::new(
                attempts,
                delay_ms.map(Duration::from_millis).unwrap_or(defaults.retry.delay),
            ),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match get(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
