use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::{catalog::BadgeCatalog, errors::BadgeError, models::BadgeDefinition};

/// Achievement tracks. Uncategorized badge ids fall back to `Special`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hits,
    Runs,
    Defense,
    Cookies,
    Games,
    Mvp,
    Special,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::Hits => "hits",
                Category::Runs => "runs",
                Category::Defense => "defense",
                Category::Cookies => "cookies",
                Category::Games => "games",
                Category::Mvp => "mvp",
                Category::Special => "special",
            }
        )
    }
}

/// One track: display metadata plus its badge ids ordered easiest to
/// hardest. The order defines "next badge in this track".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: Category,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub badge_ids: Vec<String>,
}

/// Immutable grouping of catalog badges into tracks.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    categories: Vec<CategoryDefinition>,
    by_badge: HashMap<String, Category>,
}

impl CategoryIndex {
    /// Validates that every referenced badge exists in the catalog and that
    /// no badge is claimed by two categories.
    pub fn new(
        categories: Vec<CategoryDefinition>,
        catalog: &BadgeCatalog,
    ) -> Result<Self, BadgeError> {
        let mut by_badge = HashMap::new();
        for category in &categories {
            for id in &category.badge_ids {
                if catalog.get(id).is_none() {
                    return Err(BadgeError::Category(format!(
                        "category {} references unknown badge id: {}",
                        category.id, id
                    )));
                }
                if by_badge.insert(id.clone(), category.id).is_some() {
                    return Err(BadgeError::Category(format!(
                        "badge id {} appears in more than one category",
                        id
                    )));
                }
            }
        }
        Ok(Self {
            categories,
            by_badge,
        })
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// The track a badge belongs to, falling back to `Special` for unmapped
    /// ids. Callers must not treat the fallback as an error.
    pub fn category_of(&self, badge_id: &str) -> Category {
        self.by_badge
            .get(badge_id)
            .copied()
            .unwrap_or(Category::Special)
    }

    /// First badge in category order that is not yet owned, or `None` when
    /// the track is exhausted. An empty owned set yields the track's very
    /// first badge.
    pub fn next_in_category<'a>(
        &self,
        category: Category,
        catalog: &'a BadgeCatalog,
        owned: &HashSet<String>,
    ) -> Option<&'a BadgeDefinition> {
        let definition = self.categories.iter().find(|c| c.id == category)?;
        definition
            .badge_ids
            .iter()
            .filter(|id| !owned.contains(id.as_str()))
            .find_map(|id| catalog.get(id))
    }
}

fn track(id: Category, name: &str, icon: &str, description: &str, badge_ids: &[&str]) -> CategoryDefinition {
    CategoryDefinition {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        badge_ids: badge_ids.iter().map(|s| s.to_string()).collect(),
    }
}

/// The standard tracks paired with `standard_catalog`.
pub fn standard_categories(catalog: &BadgeCatalog) -> CategoryIndex {
    let categories = vec![
        track(
            Category::Hits,
            "Hitting",
            "⚾",
            "Career hits",
            &["first_hit", "slugger_10", "slugger_25", "slugger_50"],
        ),
        track(
            Category::Runs,
            "Running",
            "🏃",
            "Career runs scored",
            &["first_run", "runner_10", "runner_25", "runner_50"],
        ),
        track(
            Category::Defense,
            "Defense",
            "🧤",
            "Good defensive plays",
            &["first_defense", "defender_10", "defender_25", "defender_50"],
        ),
        track(
            Category::Cookies,
            "Cookies",
            "🍪",
            "Bonus cookies earned",
            &["first_cookie", "cookie_5", "cookie_15", "cookie_30"],
        ),
        track(
            Category::Games,
            "Attendance",
            "📅",
            "Games played",
            &["first_game", "steady", "regular_10", "veteran_25", "iron_player_50"],
        ),
        track(
            Category::Mvp,
            "MVP",
            "🏆",
            "Games as MVP",
            &["first_mvp", "mvp_3", "mvp_5"],
        ),
        track(
            Category::Special,
            "Special",
            "🌟",
            "One-of-a-kind feats",
            &["first_homerun", "homerun_5", "all_rounder", "homerun_10", "perfect_game"],
        ),
    ];

    CategoryIndex::new(categories, catalog).expect("standard categories reference known badges")
}
