//! Bounded retry with a fixed delay, shared by every outbound call.

use crate::remote::transport::Transport;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ATTEMPTS: u32 = 3;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// How many times to try a request and how long to wait between tries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Attempts actually made; a zero bound still tries once.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Terminal failure of a retried request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchError {
    /// Every attempt failed.
    Exhausted { url: String, attempts: u32 },
    /// The request succeeded but the JSON did not have the expected shape.
    Decode { url: String, message: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Exhausted { url, attempts } => {
                write!(f, "fetch exhausted after {} attempts for {}", attempts, url)
            }
            FetchError::Decode { url, message } => {
                write!(f, "unexpected payload from {}: {}", url, message)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// GET `url` until it succeeds or the policy runs out. No delay after the last attempt.
pub async fn fetch_with_retry<T: Transport>(
    transport: &T,
    policy: &RetryPolicy,
    url: &str,
) -> Result<Value, FetchError> {
    let attempts = policy.attempts();
    for attempt in 1..=attempts {
        match transport.get_json(url).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::warn!("Attempt {}/{} failed for {}: {}", attempt, attempts, url, e);
                if attempt < attempts && !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }
    Err(FetchError::Exhausted {
        url: url.to_string(),
        attempts,
    })
}
