use super::models::{PerGameStats, StatSnapshot};

/// Combines a player's completed-game history with the stats of an
/// in-progress game, if any, into one cumulative snapshot.
///
/// The open game counts toward the counters and `games_played` exactly once
/// here; callers must not add it to `history` as well and must not add their
/// own +1. MVP flags and the perfect-game check only consider finalized
/// history entries, since both are decided at game completion.
pub fn aggregate(history: &[PerGameStats], open_game: Option<&PerGameStats>) -> StatSnapshot {
    let mut snapshot = StatSnapshot::default();

    for game in history {
        snapshot.total_hits += game.hits;
        snapshot.total_runs += game.runs;
        snapshot.total_good_defense += game.good_defense;
        snapshot.total_bonus_cookie += game.bonus_cookie;
        snapshot.total_homerun += game.homerun;
        if game.is_mvp {
            snapshot.mvp_count += 1;
        }
        if game.hits > 0 && game.runs > 0 && game.good_defense > 0 {
            snapshot.has_perfect_game = true;
        }
    }
    snapshot.games_played = history.len() as u32;

    if let Some(open) = open_game {
        snapshot.total_hits += open.hits;
        snapshot.total_runs += open.runs;
        snapshot.total_good_defense += open.good_defense;
        snapshot.total_bonus_cookie += open.bonus_cookie;
        snapshot.total_homerun += open.homerun;
        snapshot.games_played += 1;
    }

    snapshot.total_points = snapshot.total_hits
        + snapshot.total_runs
        + snapshot.total_good_defense
        + snapshot.total_bonus_cookie;

    snapshot
}
