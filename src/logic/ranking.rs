//! The three leaderboards: captures, win/loss and league points.

use crate::logic::scoring::score_players;
use crate::models::{PlayerId, Tracker};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One player as shown on the leaderboards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub capture_count: u32,
    pub winnings: u32,
    pub losses: u32,
    pub score: u64,
}

/// Highlight for the top three places of a list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a zero-based list position.
    pub fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Medal::Gold => "gold",
            Medal::Silver => "gray",
            Medal::Bronze => "#cd7f32",
        }
    }
}

/// Snapshot of every ranking, computed from one read of the tracker.
#[derive(Clone, Debug, Serialize)]
pub struct Leaderboards {
    pub generated_at: DateTime<Utc>,
    /// Players in creation order (detail blocks).
    pub players: Vec<Standing>,
    pub captures: Vec<Standing>,
    pub win_loss: Vec<Standing>,
    pub points: Vec<Standing>,
}

impl Leaderboards {
    pub fn empty() -> Self {
        Self::rank(Vec::new(), Utc::now())
    }

    /// Sort standings three ways. Sorts are stable, so ties keep creation order.
    pub fn rank(players: Vec<Standing>, generated_at: DateTime<Utc>) -> Self {
        let mut captures = players.clone();
        captures.sort_by(|a, b| b.capture_count.cmp(&a.capture_count));

        let mut win_loss = players.clone();
        win_loss.sort_by(|a, b| b.winnings.cmp(&a.winnings));

        let mut points = players.clone();
        points.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            generated_at,
            players,
            captures,
            win_loss,
            points,
        }
    }
}

/// Standings for every tracked player, with names joined in from the cache.
pub fn standings(tracker: &Tracker) -> Vec<Standing> {
    let players = tracker.players();
    players
        .iter()
        .zip(score_players(players))
        .map(|(p, score)| Standing {
            id: p.id.clone(),
            name: tracker.display_name(&p.id).to_string(),
            capture_count: p.capture_count,
            winnings: p.winnings,
            losses: p.losses,
            score,
        })
        .collect()
}

/// Recompute all leaderboards from the current tracker contents.
pub fn build_leaderboards(tracker: &Tracker) -> Leaderboards {
    Leaderboards::rank(standings(tracker), Utc::now())
}
