//! Integration tests for scoring and the three leaderboards.

use capture_scoreboard_web::{
    adjusted_points, build_leaderboards, score_players, PlayerId, PlayerRecord, PlayerStats, Tracker,
};

fn stats(captures: u32, wins: u32, losses: u32) -> PlayerStats {
    PlayerStats {
        capture_count: captures,
        winnings: wins,
        losses,
    }
}

fn tracker_with(players: &[(&str, PlayerStats)]) -> Tracker {
    let mut t = Tracker::new();
    for (id, s) in players {
        let id = PlayerId::new(*id);
        t.mark_known(&id);
        t.upsert_stats(&id, *s);
    }
    t
}

fn record(id: &str, wins: u32, losses: u32) -> PlayerRecord {
    PlayerRecord::new(PlayerId::new(id), stats(0, wins, losses))
}

#[test]
fn more_captures_rank_first() {
    let t = tracker_with(&[("b", stats(5, 0, 0)), ("a", stats(10, 0, 0))]);
    let boards = build_leaderboards(&t);
    let order: Vec<_> = boards.captures.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["a", "b"]);
}

#[test]
fn ties_keep_creation_order() {
    let t = tracker_with(&[
        ("first", stats(3, 2, 0)),
        ("second", stats(3, 2, 0)),
        ("third", stats(8, 1, 0)),
    ]);
    let boards = build_leaderboards(&t);
    let captures: Vec<_> = boards.captures.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(captures, ["third", "first", "second"]);
    let wins: Vec<_> = boards.win_loss.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(wins, ["first", "second", "third"]);
    // nobody has a loss, so every score is zero and the order is untouched
    let points: Vec<_> = boards.points.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(points, ["first", "second", "third"]);
}

#[test]
fn pairwise_scores_use_winnings_on_both_sides() {
    // a vs b: adjusted_points(3, 1) -> gain 20, loss 1  => 3*20 - 1*1 = 59
    // b vs a: adjusted_points(1, 3) -> gain 40, loss 3  => 1*40 - 2*3 = 34
    let players = vec![record("a", 3, 1), record("b", 1, 2)];
    assert_eq!(score_players(&players), vec![59, 34]);
}

#[test]
fn idle_players_add_nothing_to_others() {
    let base = vec![record("a", 3, 1), record("b", 1, 2)];
    let mut with_idle = base.clone();
    with_idle.push(record("idle", 0, 0));
    let scores = score_players(&with_idle);
    assert_eq!(&scores[..2], &score_players(&base)[..]);
    assert_eq!(scores[2], 0);
}

#[test]
fn scores_are_floored_at_zero() {
    let players = vec![record("loser", 0, 5), record("champ", 10, 1)];
    let scores = score_players(&players);
    assert_eq!(scores[0], 0);
    assert!(scores[1] > 0);
}

#[test]
fn points_board_sorted_by_score() {
    let t = tracker_with(&[("a", stats(1, 1, 2)), ("b", stats(1, 3, 1))]);
    let boards = build_leaderboards(&t);
    assert_eq!(boards.points[0].id.as_str(), "b");
    assert_eq!(boards.points[0].score, 59);
    assert_eq!(boards.points[1].score, 34);
    assert_eq!(boards.points[0].name, "Unknown player");
}

#[test]
fn loser_loss_bounded_by_loser_points() {
    for w in [0, 1, 2, 5, 17, 100] {
        for l in [0, 1, 2, 3, 8, 50, 1000] {
            assert!(adjusted_points(w, l).loser_loss <= l);
        }
    }
}
