//! Data refresh: discovery of new identifiers, per-player stat reloads, name resolution.
//!
//! The tracker lock is only taken between network calls, never across an await.

use crate::models::{PlayerId, Tracker};
use crate::remote::{Client, FetchError, Transport};
use futures_util::future::join_all;
use std::fmt;
use std::sync::RwLock;

/// Cached for players whose lookup answered without a username.
pub const MISSING_USERNAME: &str = "Unknown";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RefreshError {
    /// Stat file or discovery listing could not be fetched or decoded.
    Fetch(FetchError),
    /// Stats were stored but the name lookup failed; retried next refresh.
    NameLookup(FetchError),
    /// A thread panicked while holding the tracker lock.
    StatePoisoned,
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshError::Fetch(e) => write!(f, "{}", e),
            RefreshError::NameLookup(e) => write!(f, "name lookup failed: {}", e),
            RefreshError::StatePoisoned => write!(f, "tracker lock poisoned"),
        }
    }
}

impl std::error::Error for RefreshError {}

impl From<FetchError> for RefreshError {
    fn from(e: FetchError) -> Self {
        RefreshError::Fetch(e)
    }
}

/// Fetch one player's stats, upsert the record, then make sure a name is cached.
pub async fn refresh_player<T: Transport>(
    tracker: &RwLock<Tracker>,
    client: &Client<T>,
    id: &PlayerId,
) -> Result<(), RefreshError> {
    let data = client.fetch_player(id).await?;
    {
        let mut t = tracker.write().map_err(|_| RefreshError::StatePoisoned)?;
        t.upsert_stats(id, data.stats());
    }
    resolve_name(tracker, client, id).await?;
    Ok(())
}

/// Cached name if present, otherwise look it up and cache it.
pub async fn resolve_name<T: Transport>(
    tracker: &RwLock<Tracker>,
    client: &Client<T>,
    id: &PlayerId,
) -> Result<String, RefreshError> {
    {
        let t = tracker.read().map_err(|_| RefreshError::StatePoisoned)?;
        if let Some(name) = t.cached_name(id) {
            return Ok(name.to_string());
        }
    }
    log::debug!("Looking up username for {}", id);
    let lookup = client
        .lookup_username(id)
        .await
        .map_err(RefreshError::NameLookup)?;
    let name = lookup
        .username
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| MISSING_USERNAME.to_string());
    let mut t = tracker.write().map_err(|_| RefreshError::StatePoisoned)?;
    t.cache_name(id, name);
    Ok(t.display_name(id).to_string())
}

/// Refresh one player, logging instead of returning failures.
/// Returns true when fresh stats were stored, even if the name is still unresolved.
pub async fn refresh_logged<T: Transport>(tracker: &RwLock<Tracker>, client: &Client<T>, id: &PlayerId) -> bool {
    match refresh_player(tracker, client, id).await {
        Ok(()) => true,
        Err(RefreshError::NameLookup(e)) => {
            log::warn!("Stats stored for {} but name lookup failed: {}", id, e);
            true
        }
        Err(e) => {
            log::error!("Refresh failed for {}: {}", id, e);
            false
        }
    }
}

/// Ask the data host for its identifier listing and refresh every identifier not seen before.
/// Returns the newly discovered identifiers.
pub async fn discover<T: Transport>(
    tracker: &RwLock<Tracker>,
    client: &Client<T>,
) -> Result<Vec<PlayerId>, RefreshError> {
    let listing = client.fetch_listing().await?;
    let fresh: Vec<PlayerId> = {
        let mut t = tracker.write().map_err(|_| RefreshError::StatePoisoned)?;
        listing
            .iter()
            .filter_map(|raw| PlayerId::from_listing(raw))
            .filter(|id| t.mark_known(id))
            .collect()
    };
    if !fresh.is_empty() {
        log::info!("Discovered {} new player(s)", fresh.len());
    }
    join_all(fresh.iter().map(|id| refresh_logged(tracker, client, id))).await;
    Ok(fresh)
}

/// Refresh every known identifier concurrently. Returns how many had fresh stats stored.
pub async fn reload_all<T: Transport>(
    tracker: &RwLock<Tracker>,
    client: &Client<T>,
) -> Result<usize, RefreshError> {
    let ids = {
        let t = tracker.read().map_err(|_| RefreshError::StatePoisoned)?;
        t.known_ids().to_vec()
    };
    log::debug!("Reloading data for {} player(s)", ids.len());
    let results = join_all(ids.iter().map(|id| refresh_logged(tracker, client, id))).await;
    Ok(results.into_iter().filter(|ok| *ok).count())
}
