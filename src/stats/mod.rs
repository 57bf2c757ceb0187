mod aggregator;
pub mod models;

pub use aggregator::aggregate;
pub use models::{Metric, PerGameStats, StatSnapshot};
