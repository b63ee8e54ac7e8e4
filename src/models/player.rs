//! PlayerId and PlayerRecord data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix the data host appends to identifiers in its listing (they are file names there).
const LISTING_SUFFIX: &str = ".json";

/// Opaque per-player key, used as the join key across discovery, stats and name lookups.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Normalize a discovery entry: trims whitespace and strips the `.json` suffix.
    /// Returns None for entries that are empty once normalized.
    pub fn from_listing(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let id = trimmed.strip_suffix(LISTING_SUFFIX).unwrap_or(trimmed);
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First two characters, used as the shard directory on the data host.
    pub fn shard_prefix(&self) -> &str {
        match self.0.char_indices().nth(2) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stats pulled from one player-data payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub capture_count: u32,
    pub winnings: u32,
    pub losses: u32,
}

/// A tracked player. Created on the first successful fetch, updated in place afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub capture_count: u32,
    pub winnings: u32,
    pub losses: u32,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, stats: PlayerStats) -> Self {
        Self {
            id,
            capture_count: stats.capture_count,
            winnings: stats.winnings,
            losses: stats.losses,
        }
    }

    /// Overwrite counters with a fresher fetch.
    pub fn apply(&mut self, stats: PlayerStats) {
        self.capture_count = stats.capture_count;
        self.winnings = stats.winnings;
        self.losses = stats.losses;
    }

    /// True once the player has recorded at least one win or loss.
    pub fn has_battled(&self) -> bool {
        self.winnings > 0 || self.losses > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_entries_lose_their_json_suffix() {
        let id = PlayerId::from_listing("ab12-cd.json").unwrap();
        assert_eq!(id.as_str(), "ab12-cd");
        assert_eq!(PlayerId::from_listing(" ab12-cd ").unwrap(), id);
    }

    #[test]
    fn blank_listing_entries_are_rejected() {
        assert!(PlayerId::from_listing("").is_none());
        assert!(PlayerId::from_listing(".json").is_none());
        assert!(PlayerId::from_listing("   ").is_none());
    }

    #[test]
    fn shard_prefix_is_first_two_chars() {
        assert_eq!(PlayerId::new("f3a9c1").shard_prefix(), "f3");
        assert_eq!(PlayerId::new("z").shard_prefix(), "z");
    }

    #[test]
    fn apply_overwrites_counters() {
        let mut p = PlayerRecord::new(PlayerId::new("aa"), PlayerStats::default());
        assert!(!p.has_battled());
        p.apply(PlayerStats {
            capture_count: 7,
            winnings: 0,
            losses: 2,
        });
        assert_eq!(p.capture_count, 7);
        assert!(p.has_battled());
    }
}
