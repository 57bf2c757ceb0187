pub mod catalog;
pub mod categories;
pub mod eligibility;
pub mod progress;
pub mod repository;
pub mod service;

mod errors;
pub mod models;

pub use catalog::{standard_catalog, BadgeCatalog};
pub use categories::{standard_categories, Category, CategoryDefinition, CategoryIndex};
pub use eligibility::find_newly_earned;
pub use errors::BadgeError;
pub use models::{
    AwardedBadge, BadgeDefinition, BadgeProgress, ProgressRule, Requirement, Tier,
};
pub use progress::{all_unearned_sorted, next_per_category, progress_of, CategoryProgress};
pub use repository::{BadgeRepository, InMemoryBadgeRepository};
pub use service::{AwardOutcome, AwardService};
