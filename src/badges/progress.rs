use std::collections::HashSet;

use serde::Serialize;

use crate::stats::StatSnapshot;

use super::{
    catalog::BadgeCatalog,
    categories::{Category, CategoryIndex},
    models::{BadgeDefinition, BadgeProgress, ProgressRule, Requirement},
};

/// Display row for one unearned badge's progress within its track.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
    pub badge: BadgeDefinition,
    pub progress: BadgeProgress,
    pub category: Category,
}

/// Fractional progress toward an unearned badge, or `None` once the
/// snapshot satisfies the requirement (progress rows are only meaningful
/// for badges still ahead of the player).
///
/// A badge-declared progress rule wins over the requirement-derived ratio;
/// composites without a rule report the "not started" placeholder.
pub fn progress_of(badge: &BadgeDefinition, snapshot: &StatSnapshot) -> Option<BadgeProgress> {
    if badge.requirement.is_met(snapshot) {
        return None;
    }

    let progress = match &badge.progress {
        Some(ProgressRule::Ratio { metric, target }) => {
            BadgeProgress::from_ratio(snapshot.metric(*metric), *target)
        }
        None => match &badge.requirement {
            Requirement::Counter { metric, threshold } => {
                BadgeProgress::from_ratio(snapshot.metric(*metric), *threshold)
            }
            Requirement::AllOf { .. } | Requirement::PerfectGame => BadgeProgress::not_started(),
        },
    };

    Some(progress)
}

/// The most attainable unearned badge per track: for every category,
/// computes progress over its unearned badges and keeps the single entry
/// with the highest percent (ties go to the earlier badge in track order).
/// Tracks whose best entry sits at 0% are omitted; the result is sorted
/// descending by percent.
pub fn next_per_category(
    catalog: &BadgeCatalog,
    index: &CategoryIndex,
    snapshot: &StatSnapshot,
    owned: &HashSet<String>,
) -> Vec<CategoryProgress> {
    let mut rows = Vec::new();

    for definition in index.categories() {
        let mut leader: Option<CategoryProgress> = None;
        for id in &definition.badge_ids {
            if owned.contains(id.as_str()) {
                continue;
            }
            let Some(badge) = catalog.get(id) else {
                continue;
            };
            let Some(progress) = progress_of(badge, snapshot) else {
                continue;
            };
            let improves = leader
                .as_ref()
                .is_none_or(|best| progress.percent > best.progress.percent);
            if improves {
                leader = Some(CategoryProgress {
                    badge: badge.clone(),
                    progress,
                    category: definition.id,
                });
            }
        }
        if let Some(row) = leader {
            if row.progress.percent > 0 {
                rows.push(row);
            }
        }
    }

    rows.sort_by(|a, b| b.progress.percent.cmp(&a.progress.percent));
    rows
}

/// Progress rows for every unearned badge in the catalog, placeholders
/// included, sorted descending by percent (stable within equal percent, so
/// catalog order breaks ties).
pub fn all_unearned_sorted(
    catalog: &BadgeCatalog,
    index: &CategoryIndex,
    snapshot: &StatSnapshot,
    owned: &HashSet<String>,
) -> Vec<CategoryProgress> {
    let mut rows: Vec<CategoryProgress> = catalog
        .iter()
        .filter(|badge| !owned.contains(badge.id.as_str()))
        .filter_map(|badge| {
            progress_of(badge, snapshot).map(|progress| CategoryProgress {
                badge: badge.clone(),
                progress,
                category: index.category_of(&badge.id),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.progress.percent.cmp(&a.progress.percent));
    rows
}
