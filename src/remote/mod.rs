//! Outbound calls: discovery listing, player stat files, name lookups.

mod endpoints;
mod retry;
mod transport;

pub use endpoints::{Endpoints, DEFAULT_DATA_BASE, DEFAULT_NAME_BASE};
pub use retry::{fetch_with_retry, FetchError, RetryPolicy, DEFAULT_ATTEMPTS, DEFAULT_DELAY};
pub use transport::{AttemptError, HttpTransport, Transport};

use crate::models::{PlayerData, PlayerId, UsernameLookup};
use serde::de::DeserializeOwned;

/// Typed access to the remote services. Every call goes through the same retry policy.
#[derive(Clone, Debug)]
pub struct Client<T> {
    transport: T,
    endpoints: Endpoints,
    policy: RetryPolicy,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, endpoints: Endpoints, policy: RetryPolicy) -> Self {
        Self {
            transport,
            endpoints,
            policy,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Raw discovery listing (entries may still carry the `.json` suffix).
    pub async fn fetch_listing(&self) -> Result<Vec<String>, FetchError> {
        self.get(&self.endpoints.discovery_url()).await
    }

    pub async fn fetch_player(&self, id: &PlayerId) -> Result<PlayerData, FetchError> {
        self.get(&self.endpoints.player_url(id)).await
    }

    pub async fn lookup_username(&self, id: &PlayerId) -> Result<UsernameLookup, FetchError> {
        self.get(&self.endpoints.name_url(id)).await
    }

    async fn get<R: DeserializeOwned>(&self, url: &str) -> Result<R, FetchError> {
        let value = fetch_with_retry(&self.transport, &self.policy, url).await?;
        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
