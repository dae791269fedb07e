//! Provider capability consumed by the sync services

use super::client::Result;
use super::types::{CompetitionEvents, RawEvent, SportWithCategories, SportsResponse};
use async_trait::async_trait;

/// Read access to the four levels of the provider's catalog tree
#[async_trait]
pub trait OddsProvider: Send + Sync {
    async fn fetch_all_sports(&self) -> Result<SportsResponse>;

    async fn fetch_competitions_under_sport(&self, sport_key: &str) -> Result<SportWithCategories>;

    async fn fetch_events_under_competition(&self, competition_key: &str) -> Result<CompetitionEvents>;

    async fn fetch_event(&self, event_key: &str) -> Result<RawEvent>;
}
