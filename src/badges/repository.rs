use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{errors::BadgeError, models::AwardedBadge};

#[async_trait]
pub trait BadgeRepository: Send + Sync {
    async fn owned_badges(&self, player_id: &str) -> Result<Vec<AwardedBadge>, BadgeError>;
    async fn append_badges(
        &self,
        player_id: &str,
        badges: &[AwardedBadge],
    ) -> Result<(), BadgeError>;
    async fn reset_player(&self, player_id: &str) -> Result<(), BadgeError>;
}

#[derive(Debug, Default)]
pub struct InMemoryBadgeRepository {
    players: Arc<RwLock<HashMap<String, Vec<AwardedBadge>>>>,
}

impl InMemoryBadgeRepository {
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl BadgeRepository for InMemoryBadgeRepository {
    async fn owned_badges(&self, player_id: &str) -> Result<Vec<AwardedBadge>, BadgeError> {
        let players = self.players.read().await;
        Ok(players.get(player_id).cloned().unwrap_or_default())
    }

    async fn append_badges(
        &self,
        player_id: &str,
        badges: &[AwardedBadge],
    ) -> Result<(), BadgeError> {
        let mut players = self.players.write().await;
        let records = players.entry(player_id.to_string()).or_default();

        for badge in badges {
            if records.iter().any(|record| record.badge_id == badge.badge_id) {
                debug!(player_id, badge_id = %badge.badge_id, "badge already owned, skipping");
                continue;
            }
            records.push(badge.clone());
        }

        Ok(())
    }

    async fn reset_player(&self, player_id: &str) -> Result<(), BadgeError> {
        let mut players = self.players.write().await;
        players.remove(player_id);
        Ok(())
    }
}
