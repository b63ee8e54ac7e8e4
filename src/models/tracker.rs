//! Tracker: the single owner of everything the scoreboard knows.

use crate::models::player::{PlayerId, PlayerRecord, PlayerStats};
use std::collections::{HashMap, HashSet};

/// Name shown for players whose name lookup has not succeeded yet.
pub const UNRESOLVED_NAME: &str = "Unknown player";

/// Application state: known identifiers, player records and the name cache.
///
/// Nothing is ever removed. Identifiers and records keep first-seen order so
/// ranking ties stay stable across refreshes.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    /// Every identifier discovery has reported, in first-seen order.
    known: Vec<PlayerId>,
    known_set: HashSet<PlayerId>,
    /// Players with at least one successful fetch, in creation order.
    players: Vec<PlayerRecord>,
    names: HashMap<PlayerId, String>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identifier as known. Returns true the first time it is seen.
    pub fn mark_known(&mut self, id: &PlayerId) -> bool {
        if !self.known_set.insert(id.clone()) {
            return false;
        }
        self.known.push(id.clone());
        true
    }

    pub fn is_known(&self, id: &PlayerId) -> bool {
        self.known_set.contains(id)
    }

    pub fn known_ids(&self) -> &[PlayerId] {
        &self.known
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Create the record on first sight, otherwise overwrite its counters.
    pub fn upsert_stats(&mut self, id: &PlayerId, stats: PlayerStats) {
        match self.players.iter_mut().find(|p| &p.id == id) {
            Some(p) => p.apply(stats),
            None => self.players.push(PlayerRecord::new(id.clone(), stats)),
        }
    }

    pub fn cached_name(&self, id: &PlayerId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Cache a resolved name. The first name stored for an identifier wins.
    pub fn cache_name(&mut self, id: &PlayerId, name: impl Into<String>) {
        self.names.entry(id.clone()).or_insert_with(|| name.into());
    }

    /// Display name: the cached one, or a placeholder while unresolved.
    pub fn display_name(&self, id: &PlayerId) -> &str {
        self.cached_name(id).unwrap_or(UNRESOLVED_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(captures: u32, wins: u32, losses: u32) -> PlayerStats {
        PlayerStats {
            capture_count: captures,
            winnings: wins,
            losses,
        }
    }

    #[test]
    fn mark_known_has_set_semantics() {
        let mut t = Tracker::new();
        let a = PlayerId::new("aa");
        assert!(t.mark_known(&a));
        assert!(!t.mark_known(&a));
        assert!(t.mark_known(&PlayerId::new("bb")));
        assert_eq!(t.known_ids().len(), 2);
        assert_eq!(t.known_ids()[0], a);
    }

    #[test]
    fn upsert_creates_once_then_updates_in_place() {
        let mut t = Tracker::new();
        let a = PlayerId::new("aa");
        let b = PlayerId::new("bb");
        t.upsert_stats(&a, stats(1, 0, 0));
        t.upsert_stats(&b, stats(2, 0, 0));
        t.upsert_stats(&a, stats(9, 3, 1));
        assert_eq!(t.players().len(), 2);
        assert_eq!(t.players()[0].id, a);
        assert_eq!(t.player(&a).unwrap().capture_count, 9);
        assert_eq!(t.player(&a).unwrap().winnings, 3);
    }

    #[test]
    fn name_cache_keeps_first_name() {
        let mut t = Tracker::new();
        let a = PlayerId::new("aa");
        assert_eq!(t.display_name(&a), UNRESOLVED_NAME);
        t.cache_name(&a, "Ash");
        t.cache_name(&a, "Gary");
        assert_eq!(t.display_name(&a), "Ash");
    }
}
