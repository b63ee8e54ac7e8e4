//! CSV export of the points ranking.

use crate::logic::ranking::Leaderboards;
use serde::Serialize;

#[derive(Serialize)]
struct PointsRow<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    captures: u32,
    wins: u32,
    losses: u32,
    points: u64,
}

/// Points ranking as CSV, one row per player with a header line.
pub fn points_csv(boards: &Leaderboards) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for (index, p) in boards.points.iter().enumerate() {
        wtr.serialize(PointsRow {
            rank: index + 1,
            id: p.id.as_str(),
            name: &p.name,
            captures: p.capture_count,
            wins: p.winnings,
            losses: p.losses,
            points: p.score,
        })?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
