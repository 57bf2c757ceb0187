// Badge engine for the classroom baseball game
// This file exposes the public API for hosts and integration tests

pub mod badges;
pub mod stats;

// Re-export commonly used types for easier access in callers and tests
pub use badges::{
    all_unearned_sorted, find_newly_earned, next_per_category, progress_of, standard_catalog,
    standard_categories, AwardOutcome, AwardService, AwardedBadge, BadgeCatalog, BadgeDefinition,
    BadgeError, BadgeProgress, BadgeRepository, Category, CategoryIndex, CategoryProgress,
    InMemoryBadgeRepository, Requirement, Tier,
};
pub use stats::{aggregate, Metric, PerGameStats, StatSnapshot};
