use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// One player's stat line for a single game, as recorded by the scoring UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGameStats {
    pub hits: u32,
    pub runs: u32,
    pub good_defense: u32,
    pub bonus_cookie: u32,
    pub homerun: u32,
    pub is_mvp: bool,
}

/// The counter families a badge requirement can read from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Hits,
    Runs,
    GoodDefense,
    BonusCookies,
    Homeruns,
    GamesPlayed,
    MvpCount,
    Points,
}

/// Cumulative career statistics for one player: completed-game history plus
/// at most one open game's delta. Always derived by `aggregate`, never
/// assembled by hand outside of tests; `total_points` is recomputed there
/// and never trusted from input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub total_hits: u32,
    pub total_runs: u32,
    pub total_good_defense: u32,
    pub total_bonus_cookie: u32,
    pub total_homerun: u32,
    pub games_played: u32,
    pub mvp_count: u32,
    pub total_points: u32,
    pub has_perfect_game: bool,
}

impl StatSnapshot {
    /// Reads the counter a metric refers to.
    pub fn metric(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Hits => self.total_hits,
            Metric::Runs => self.total_runs,
            Metric::GoodDefense => self.total_good_defense,
            Metric::BonusCookies => self.total_bonus_cookie,
            Metric::Homeruns => self.total_homerun,
            Metric::GamesPlayed => self.games_played,
            Metric::MvpCount => self.mvp_count,
            Metric::Points => self.total_points,
        }
    }
}
