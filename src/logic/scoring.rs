//! League points: pairwise adjustment between every two players with recorded battles.

use crate::models::PlayerRecord;

/// Base gain for a win before the underdog bonus.
const BASE_GAIN: u32 = 20;
/// Ceiling on the underdog bonus.
const MAX_BONUS: f64 = 30.0;
/// Loss charged when both sides are even.
const BASE_LOSS: f64 = 15.0;

/// Points moved by one win between two players.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AdjustedPoints {
    pub winner_gain: u32,
    pub loser_loss: u32,
}

/// Gain for the winner and loss for the loser, scaled by how far behind the winner is.
///
/// `factor = max((loser + 1) / (winner + 1), 1)`; the gain is `20 + min(30, round(20 * (factor - 1)))`
/// and the loss is `max(round(15 / factor), 1)`, never more than `loser_points`.
pub fn adjusted_points(winner_points: u32, loser_points: u32) -> AdjustedPoints {
    let factor = ((f64::from(loser_points) + 1.0) / (f64::from(winner_points) + 1.0)).max(1.0);
    let bonus = (20.0 * (factor - 1.0)).round().min(MAX_BONUS) as u32;
    let loser_loss = ((BASE_LOSS / factor).round() as u32).max(1);
    AdjustedPoints {
        winner_gain: BASE_GAIN + bonus,
        loser_loss: loser_loss.min(loser_points),
    }
}

/// Score for one player against everyone else, floored at zero.
///
/// Only opponents with at least one loss are counted. Both sides of the adjustment use
/// winnings (the player's and the opponent's); losses only weigh in as a multiplier.
pub fn score_player(player: &PlayerRecord, all: &[PlayerRecord]) -> u64 {
    if !player.has_battled() {
        return 0;
    }
    let wins = i64::from(player.winnings);
    let losses = i64::from(player.losses);
    let points: i64 = all
        .iter()
        .filter(|opponent| opponent.id != player.id && opponent.losses > 0)
        .map(|opponent| {
            let adj = adjusted_points(player.winnings, opponent.winnings);
            wins * i64::from(adj.winner_gain) - losses * i64::from(adj.loser_loss)
        })
        .sum();
    points.max(0) as u64
}

/// Scores for every player, in the same order as `players`.
pub fn score_players(players: &[PlayerRecord]) -> Vec<u64> {
    players.iter().map(|p| score_player(p, players)).collect()
}
