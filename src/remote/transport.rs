//! Single-attempt JSON GET, behind a trait so refresh logic can run against a fake.

use reqwest::header::USER_AGENT;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

const AGENT: &str = concat!("capture-scoreboard/", env!("CARGO_PKG_VERSION"));

/// Why one attempt failed. Every variant is retriable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttemptError {
    /// Response arrived with a non-2xx status.
    Status(u16),
    /// Connection, DNS or timeout failure.
    Network(String),
    /// 2xx response whose body was not JSON.
    Decode(String),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Status(code) => write!(f, "HTTP error: {}", code),
            AttemptError::Network(msg) => write!(f, "network error: {}", msg),
            AttemptError::Decode(msg) => write!(f, "invalid JSON body: {}", msg),
        }
    }
}

impl std::error::Error for AttemptError {}

/// One GET returning decoded JSON.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_json(&self, url: &str) -> Result<Value, AttemptError>;
}

/// reqwest-backed transport used by the server.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, AttemptError> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(|e| AttemptError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status.as_u16()));
        }
        resp.json::<Value>()
            .await
            .map_err(|e| AttemptError::Decode(e.to_string()))
    }
}
