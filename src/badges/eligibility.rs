use std::collections::HashSet;

use crate::stats::StatSnapshot;

use super::{catalog::BadgeCatalog, models::BadgeDefinition};

/// Returns every badge the snapshot satisfies that is not already owned, in
/// catalog order. Re-running with the owned set updated to include a
/// previous result yields nothing new, which is what makes the caller's
/// "recompute, diff, append-if-absent" persistence pattern safe under retry.
pub fn find_newly_earned<'a>(
    catalog: &'a BadgeCatalog,
    snapshot: &StatSnapshot,
    owned: &HashSet<String>,
) -> Vec<&'a BadgeDefinition> {
    catalog
        .iter()
        .filter(|badge| !owned.contains(badge.id.as_str()))
        .filter(|badge| badge.requirement.is_met(snapshot))
        .collect()
}
