//! Ingestion crawl over the provider's sport → category → competition → event tree

use super::normalize::normalize_event;
use crate::domain::Identifier;
use crate::infrastructure::client::provider::{
    CategoryEntry, CompetitionSummary, OddsProvider, ProviderError, SportSummary,
};
use crate::infrastructure::store::{CatalogStore, UpsertOutcome};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Failures that abort a whole crawl. Anything below the sports list only
/// skips its own subtree.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("fetching sports failed: {0}")]
    Sports(#[source] ProviderError),

    #[error("no sports found")]
    NoSports,
}

/// Counters for one crawl
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStats {
    pub sports_seen: usize,
    pub sports_skipped: usize,
    pub sports_failed: usize,
    pub categories_skipped: usize,
    pub competitions_seen: usize,
    pub competitions_skipped: usize,
    pub competitions_failed: usize,
    pub events_seen: usize,
    pub events_inserted: usize,
    pub events_updated: usize,
    pub events_failed: usize,
    pub duration: Duration,
}

impl CrawlStats {
    pub fn events_stored(&self) -> usize {
        self.events_inserted + self.events_updated
    }
}

/// Walks the provider catalog and upserts every valid event into the store
pub struct CatalogCrawler {
    provider: Arc<dyn OddsProvider>,
    store: Arc<CatalogStore>,
}

impl CatalogCrawler {
    pub fn new(provider: Arc<dyn OddsProvider>, store: Arc<CatalogStore>) -> Self {
        Self { provider, store }
    }

    /// Run one full crawl
    pub async fn store_all_events(&self) -> Result<CrawlStats, CrawlError> {
        let started = Instant::now();
        let mut stats = CrawlStats::default();

        let response = self
            .provider
            .fetch_all_sports()
            .await
            .map_err(CrawlError::Sports)?;

        if response.sports.is_empty() {
            warn!("No sports found");
            return Err(CrawlError::NoSports);
        }
        debug!(count = response.sports.len(), "Fetched sports");

        for summary in &response.sports {
            stats.sports_seen += 1;
            self.crawl_sport(summary, &mut stats).await;
        }

        stats.duration = started.elapsed();
        info!(
            sports = stats.sports_seen,
            competitions = stats.competitions_seen,
            events_inserted = stats.events_inserted,
            events_updated = stats.events_updated,
            events_failed = stats.events_failed,
            duration_ms = stats.duration.as_millis() as u64,
            "Finished fetching events and storing them"
        );

        Ok(stats)
    }

    async fn crawl_sport(&self, summary: &SportSummary, stats: &mut CrawlStats) {
        if !summary.is_active() {
            debug!(sport = %summary.name, "Skipping inactive sport");
            stats.sports_skipped += 1;
            return;
        }

        let sport = match Identifier::new(summary.name.as_str(), summary.key.as_str()) {
            Ok(sport) => sport,
            Err(e) => {
                warn!(sport = %summary.name, "Skipping sport: {}", e);
                stats.sports_skipped += 1;
                return;
            }
        };

        let detail = match self.provider.fetch_competitions_under_sport(sport.key()).await {
            Ok(detail) => detail,
            Err(e) => {
                error!(sport = %sport.key(), "Fetching competitions failed: {}", e);
                stats.sports_failed += 1;
                return;
            }
        };

        if detail.categories.is_empty() {
            warn!(sport = %sport.key(), "No categories found under sport");
            stats.sports_skipped += 1;
            return;
        }

        for entry in &detail.categories {
            self.crawl_category(&sport, entry, stats).await;
        }
    }

    async fn crawl_category(&self, sport: &Identifier, entry: &CategoryEntry, stats: &mut CrawlStats) {
        let category = match Identifier::new(entry.name.as_str(), entry.key.as_str()) {
            Ok(category) => category,
            Err(e) => {
                warn!(sport = %sport.key(), category = %entry.name, "Skipping category: {}", e);
                stats.categories_skipped += 1;
                stats.competitions_seen += entry.competitions.len();
                stats.competitions_skipped += entry.competitions.len();
                return;
            }
        };

        if entry.competitions.is_empty() {
            warn!(sport = %sport.key(), category = %category.key(), "No competitions found under category");
            stats.categories_skipped += 1;
            return;
        }

        for summary in &entry.competitions {
            stats.competitions_seen += 1;
            self.crawl_competition(sport, &category, summary, stats).await;
        }
    }

    async fn crawl_competition(
        &self,
        sport: &Identifier,
        category: &Identifier,
        summary: &CompetitionSummary,
        stats: &mut CrawlStats,
    ) {
        let competition = match Identifier::new(summary.name.as_str(), summary.key.as_str()) {
            Ok(competition) => competition,
            Err(e) => {
                warn!(competition = %summary.name, "Skipping competition: {}", e);
                stats.competitions_skipped += 1;
                return;
            }
        };

        if summary.event_count == 0 {
            warn!(competition = %competition.key(), "No events under competition");
            stats.competitions_skipped += 1;
            return;
        }

        let listing = match self
            .provider
            .fetch_events_under_competition(competition.key())
            .await
        {
            Ok(listing) => listing,
            Err(e) => {
                error!(
                    sport = %sport.key(),
                    competition = %competition.key(),
                    "Fetching events failed: {}", e
                );
                stats.competitions_failed += 1;
                return;
            }
        };

        for raw in &listing.events {
            stats.events_seen += 1;

            let event = match normalize_event(raw, sport, category, &competition, Utc::now()) {
                Ok(event) => event,
                Err(e) => {
                    warn!(event = %raw.key, competition = %competition.key(), "Skipping event: {}", e);
                    stats.events_failed += 1;
                    continue;
                }
            };

            debug!(event = %event.key(), active = event.is_active(), "Storing event");
            match self.store.upsert(event) {
                UpsertOutcome::Inserted => stats.events_inserted += 1,
                UpsertOutcome::Updated => stats.events_updated += 1,
            }
        }
    }
}
