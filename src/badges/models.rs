use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::stats::{Metric, StatSnapshot};

/// Badge rank. The numeric values are the ordinal ordering: Special (5)
/// outranks Legend (4).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner = 1,
    Skilled = 2,
    Master = 3,
    Legend = 4,
    Special = 5,
}

impl Tier {
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tier::Beginner => "Beginner",
                Tier::Skilled => "Skilled",
                Tier::Master => "Master",
                Tier::Legend => "Legend",
                Tier::Special => "Special",
            }
        )
    }
}

/// What a snapshot must satisfy for a badge to be earned. Requirements are
/// data, not closures, so evaluation is total: every counter a requirement
/// reads is monotonically non-decreasing, which makes `is_met` monotone for
/// free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    /// A single counter reaching a threshold.
    Counter { metric: Metric, threshold: u32 },
    /// Every part satisfied at once (composite badges).
    AllOf { parts: Vec<Requirement> },
    /// Hits, runs, and good defense all scored within one completed game.
    PerfectGame,
}

impl Requirement {
    pub fn is_met(&self, snapshot: &StatSnapshot) -> bool {
        match self {
            Requirement::Counter { metric, threshold } => snapshot.metric(*metric) >= *threshold,
            Requirement::AllOf { parts } => parts.iter().all(|part| part.is_met(snapshot)),
            Requirement::PerfectGame => snapshot.has_perfect_game,
        }
    }
}

/// Optional per-badge override for how fractional progress is displayed.
/// When absent, progress derives from the requirement itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressRule {
    Ratio { metric: Metric, target: u32 },
}

/// Catalog-resident badge definition. The id is the correctness-critical
/// field; everything else is display metadata plus the evaluation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub tier: Tier,
    pub requirement: Requirement,
    pub progress: Option<ProgressRule>,
}

/// Fractional progress toward an unearned badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeProgress {
    pub current: u32,
    pub target: u32,
    pub percent: u8,
}

impl BadgeProgress {
    /// Builds a progress triple with `percent = round(100 * current / target)`
    /// clamped to [0, 100].
    pub fn from_ratio(current: u32, target: u32) -> Self {
        let target = target.max(1);
        let percent = ((u64::from(current) * 100 + u64::from(target) / 2) / u64::from(target))
            .min(100) as u8;
        Self {
            current,
            target,
            percent,
        }
    }

    /// Placeholder for badges with no meaningful fractional progress, so
    /// binary badges still render a 0% state before being earned.
    pub fn not_started() -> Self {
        Self {
            current: 0,
            target: 1,
            percent: 0,
        }
    }
}

/// Persisted record of one badge awarded to one player. Append-only; badges
/// are never revoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardedBadge {
    pub badge_id: String,
    pub awarded_at: DateTime<Utc>,
}
