use std::collections::HashMap;

use crate::stats::Metric;

use super::{
    errors::BadgeError,
    models::{BadgeDefinition, ProgressRule, Requirement, Tier},
};

/// Immutable, order-stable badge registry with an O(1) id index. Constructed
/// once and shared; never a hidden global, so tests can substitute smaller
/// catalogs.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
    index: HashMap<String, usize>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Result<Self, BadgeError> {
        let mut index = HashMap::with_capacity(badges.len());
        for (position, badge) in badges.iter().enumerate() {
            if index.insert(badge.id.clone(), position).is_some() {
                return Err(BadgeError::Catalog(format!(
                    "duplicate badge id: {}",
                    badge.id
                )));
            }
        }
        Ok(Self { badges, index })
    }

    /// Lookup by id; unknown ids are not an error, callers skip them.
    pub fn get(&self, id: &str) -> Option<&BadgeDefinition> {
        self.index.get(id).map(|&position| &self.badges[position])
    }

    /// Enumerates badges in catalog order (stable, deterministic).
    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

fn counter(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    tier: Tier,
    metric: Metric,
    threshold: u32,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        tier,
        requirement: Requirement::Counter { metric, threshold },
        progress: None,
    }
}

fn needs(metric: Metric, threshold: u32) -> Requirement {
    Requirement::Counter { metric, threshold }
}

/// The full badge catalog of the game. Adding a badge or changing a
/// threshold changes evaluation results for all players on next read;
/// nothing is precomputed or cached.
pub fn standard_catalog() -> BadgeCatalog {
    let badges = vec![
        // hits
        counter("first_hit", "First Hit", "⚾", "Get your first hit", Tier::Beginner, Metric::Hits, 1),
        counter("slugger_10", "Slugger", "🏏", "Reach 10 career hits", Tier::Skilled, Metric::Hits, 10),
        counter("slugger_25", "Big Slugger", "💥", "Reach 25 career hits", Tier::Master, Metric::Hits, 25),
        counter("slugger_50", "Hit Legend", "🌟", "Reach 50 career hits", Tier::Legend, Metric::Hits, 50),
        // runs
        counter("first_run", "First Run", "🏃", "Score your first run", Tier::Beginner, Metric::Runs, 1),
        counter("runner_10", "Base Runner", "👟", "Score 10 career runs", Tier::Skilled, Metric::Runs, 10),
        counter("runner_25", "Speedster", "⚡", "Score 25 career runs", Tier::Master, Metric::Runs, 25),
        counter("runner_50", "Run Legend", "🌟", "Score 50 career runs", Tier::Legend, Metric::Runs, 50),
        // defense
        counter("first_defense", "First Catch", "🧤", "Make your first good defensive play", Tier::Beginner, Metric::GoodDefense, 1),
        counter("defender_10", "Defender", "🛡️", "Make 10 good defensive plays", Tier::Skilled, Metric::GoodDefense, 10),
        counter("defender_25", "Wall", "🧱", "Make 25 good defensive plays", Tier::Master, Metric::GoodDefense, 25),
        counter("defender_50", "Defense Legend", "🌟", "Make 50 good defensive plays", Tier::Legend, Metric::GoodDefense, 50),
        // cookies
        counter("first_cookie", "First Cookie", "🍪", "Earn your first bonus cookie", Tier::Beginner, Metric::BonusCookies, 1),
        counter("cookie_5", "Cookie Fan", "🍪", "Earn 5 bonus cookies", Tier::Skilled, Metric::BonusCookies, 5),
        counter("cookie_15", "Cookie Collector", "🧺", "Earn 15 bonus cookies", Tier::Master, Metric::BonusCookies, 15),
        counter("cookie_30", "Cookie Monster", "😋", "Earn 30 bonus cookies", Tier::Legend, Metric::BonusCookies, 30),
        // games played
        counter("first_game", "Play Ball", "🎉", "Play your first game", Tier::Beginner, Metric::GamesPlayed, 1),
        counter("steady", "Steady", "📅", "Play 5 games", Tier::Skilled, Metric::GamesPlayed, 5),
        counter("regular_10", "Regular", "🪑", "Play 10 games", Tier::Skilled, Metric::GamesPlayed, 10),
        counter("veteran_25", "Veteran", "🎖️", "Play 25 games", Tier::Master, Metric::GamesPlayed, 25),
        counter("iron_player_50", "Iron Player", "🔩", "Play 50 games", Tier::Legend, Metric::GamesPlayed, 50),
        // mvp
        counter("first_mvp", "MVP", "🏆", "Be the MVP of a game", Tier::Master, Metric::MvpCount, 1),
        counter("mvp_3", "Triple MVP", "🏆", "Be the MVP of 3 games", Tier::Legend, Metric::MvpCount, 3),
        counter("mvp_5", "MVP Machine", "👑", "Be the MVP of 5 games", Tier::Special, Metric::MvpCount, 5),
        // homeruns and composites
        counter("first_homerun", "First Homerun", "🚀", "Hit your first homerun", Tier::Skilled, Metric::Homeruns, 1),
        counter("homerun_5", "Power Hitter", "💪", "Hit 5 career homeruns", Tier::Master, Metric::Homeruns, 5),
        BadgeDefinition {
            id: "all_rounder".to_string(),
            name: "All-Rounder".to_string(),
            icon: "🎯".to_string(),
            description: "Reach 5 hits, 5 runs, 5 defensive plays, and 5 cookies".to_string(),
            tier: Tier::Master,
            requirement: Requirement::AllOf {
                parts: vec![
                    needs(Metric::Hits, 5),
                    needs(Metric::Runs, 5),
                    needs(Metric::GoodDefense, 5),
                    needs(Metric::BonusCookies, 5),
                ],
            },
            progress: Some(ProgressRule::Ratio {
                metric: Metric::Points,
                target: 20,
            }),
        },
        counter("homerun_10", "Homerun Hero", "🦸", "Hit 10 career homeruns", Tier::Legend, Metric::Homeruns, 10),
        BadgeDefinition {
            id: "perfect_game".to_string(),
            name: "Perfect Game".to_string(),
            icon: "💎".to_string(),
            description: "Get a hit, a run, and a defensive play in one game".to_string(),
            tier: Tier::Special,
            requirement: Requirement::PerfectGame,
            progress: None,
        },
    ];

    BadgeCatalog::new(badges).expect("standard catalog has unique badge ids")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let badges = vec![
            counter("dup", "A", "x", "", Tier::Beginner, Metric::Hits, 1),
            counter("dup", "B", "x", "", Tier::Skilled, Metric::Hits, 2),
        ];

        let result = BadgeCatalog::new(badges);
        assert!(matches!(result, Err(BadgeError::Catalog(_))));
    }

    #[test]
    fn get_finds_badges_by_id() {
        let catalog = standard_catalog();

        let badge = catalog.get("first_hit").unwrap();
        assert_eq!(badge.name, "First Hit");
        assert_eq!(badge.tier, Tier::Beginner);

        assert!(catalog.get("no_such_badge").is_none());
    }

    #[test]
    fn iteration_order_is_stable() {
        let first: Vec<String> = standard_catalog().iter().map(|b| b.id.clone()).collect();
        let second: Vec<String> = standard_catalog().iter().map(|b| b.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "first_hit");
    }

    #[test]
    fn standard_catalog_thresholds_ascend_within_each_ladder() {
        let catalog = standard_catalog();
        for prefix_pair in [
            ("first_hit", "slugger_10"),
            ("slugger_10", "slugger_25"),
            ("steady", "regular_10"),
            ("first_mvp", "mvp_3"),
        ] {
            let (easier, harder) = prefix_pair;
            let easier_tier = catalog.get(easier).unwrap().tier;
            let harder_tier = catalog.get(harder).unwrap().tier;
            assert!(easier_tier <= harder_tier, "{easier} vs {harder}");
        }
    }
}
