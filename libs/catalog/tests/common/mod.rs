//! Common test utilities for catalog integration tests
//!
//! Provides a scripted in-memory `OddsProvider` and fixtures for the
//! provider's wire types.

#![allow(dead_code)]

use async_trait::async_trait;
use catalog::domain::{Event, EventDraft, Identifier};
use catalog::infrastructure::client::provider::client::Result;
use catalog::infrastructure::client::provider::{
    CategoryEntry, CompetitionEvents, CompetitionSummary, OddsProvider, ProviderError, RawEvent,
    RawIdentifier, SportSummary, SportWithCategories, SportsResponse,
};
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration as StdDuration;

/// Provider answering from scripted responses. Anything not scripted fails
/// with a `NOT_FOUND` API error.
#[derive(Default)]
pub struct FakeProvider {
    sports: Mutex<Option<SportsResponse>>,
    sport_details: Mutex<HashMap<String, SportWithCategories>>,
    competitions: Mutex<HashMap<String, CompetitionEvents>>,
    events: Mutex<HashMap<String, RawEvent>>,
    calls: Mutex<Vec<String>>,
    sports_delay: Mutex<Option<StdDuration>>,
}

fn not_found(what: &str) -> ProviderError {
    ProviderError::Api {
        status: "NOT_FOUND".to_string(),
        message: format!("{what} not found"),
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sports(self, sports: Vec<SportSummary>) -> Self {
        *self.sports.lock() = Some(SportsResponse { sports });
        self
    }

    pub fn with_sport_detail(self, detail: SportWithCategories) -> Self {
        self.sport_details.lock().insert(detail.key.clone(), detail);
        self
    }

    pub fn with_competition(self, listing: CompetitionEvents) -> Self {
        self.competitions.lock().insert(listing.key.clone(), listing);
        self
    }

    /// Hold every sports fetch open for `delay` before answering
    pub fn with_sports_delay(self, delay: StdDuration) -> Self {
        *self.sports_delay.lock() = Some(delay);
        self
    }

    /// Script the answer to a single-event fetch
    pub fn set_event(&self, event: RawEvent) {
        self.events.lock().insert(event.key.clone(), event);
    }

    /// Paths requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl OddsProvider for FakeProvider {
    async fn fetch_all_sports(&self) -> Result<SportsResponse> {
        self.calls.lock().push("sports".to_string());
        let delay = *self.sports_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.sports.lock().clone().ok_or_else(|| not_found("sports"))
    }

    async fn fetch_competitions_under_sport(&self, sport_key: &str) -> Result<SportWithCategories> {
        self.calls.lock().push(format!("sports/{sport_key}"));
        self.sport_details
            .lock()
            .get(sport_key)
            .cloned()
            .ok_or_else(|| not_found(sport_key))
    }

    async fn fetch_events_under_competition(&self, competition_key: &str) -> Result<CompetitionEvents> {
        self.calls.lock().push(format!("competitions/{competition_key}"));
        self.competitions
            .lock()
            .get(competition_key)
            .cloned()
            .ok_or_else(|| not_found(competition_key))
    }

    async fn fetch_event(&self, event_key: &str) -> Result<RawEvent> {
        self.calls.lock().push(format!("events/{event_key}"));
        self.events
            .lock()
            .get(event_key)
            .cloned()
            .ok_or_else(|| not_found(event_key))
    }
}

pub mod fixtures {
    //! Provider payloads and domain events used across tests

    use super::*;

    pub fn sport(key: &str, competition_count: u32, event_count: u32) -> SportSummary {
        SportSummary {
            name: key.to_uppercase(),
            key: key.to_string(),
            competition_count,
            event_count,
        }
    }

    pub fn competition(key: &str, event_count: u32) -> CompetitionSummary {
        CompetitionSummary {
            name: key.to_uppercase(),
            key: key.to_string(),
            event_count,
        }
    }

    pub fn category(key: &str, competitions: Vec<CompetitionSummary>) -> CategoryEntry {
        CategoryEntry {
            name: key.to_uppercase(),
            key: key.to_string(),
            competitions,
        }
    }

    pub fn sport_detail(key: &str, categories: Vec<CategoryEntry>) -> SportWithCategories {
        SportWithCategories {
            name: key.to_uppercase(),
            key: key.to_string(),
            categories,
        }
    }

    pub fn raw_event(key: &str, status: &str, cutoff: DateTime<Utc>) -> RawEvent {
        RawEvent {
            key: key.to_string(),
            name: key.to_uppercase(),
            status: status.to_string(),
            cutoff_time: cutoff.to_rfc3339(),
            ..Default::default()
        }
    }

    pub fn listing(key: &str, events: Vec<RawEvent>) -> CompetitionEvents {
        CompetitionEvents {
            name: key.to_uppercase(),
            key: key.to_string(),
            sport: RawIdentifier::default(),
            category: RawIdentifier::default(),
            events,
        }
    }

    /// Active event whose cutoff is `minutes` from now
    pub fn active_event(key: &str, minutes: i64) -> Event {
        let draft = EventDraft {
            sport: Some(Identifier::new("Tennis", "tennis").unwrap()),
            competition: Some(Identifier::new("Open", "tennis-atp-open").unwrap()),
            category: Some(Identifier::new("ATP", "atp").unwrap()),
            active: true,
            name: key.to_uppercase(),
            key: key.to_string(),
            cutoff_time: Some(Utc::now() + Duration::minutes(minutes)),
            ..Default::default()
        };
        Event::new(draft).unwrap()
    }
}
