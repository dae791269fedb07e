//! In-memory catalog store
//!
//! Single source of truth for the catalog. Keeps canonical ordered
//! collections of sports, categories, competitions and events plus
//! parent → child key indices used by the filtered read paths.
//!
//! Every write takes the exclusive lock for its whole duration, so readers
//! never observe a partially updated set of indices.

pub mod pagination;

use crate::domain::{Category, Competition, Event, Sport};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use pagination::{intersection, page_range, push_unique};

/// Events whose cutoff falls within this many seconds are re-checked
pub const CUTOFF_SOON_WINDOW_SECS: i64 = 300;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("page {page} exceeds max page (page size {page_size}, {total} rows)")]
    OutOfRange {
        page: usize,
        page_size: usize,
        total: usize,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Whether an upsert created the event row or refreshed an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Optional parent filters for [`CatalogStore::list_events`].
///
/// Empty strings count as "no filter".
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub sport: Option<String>,
    pub category: Option<String>,
    pub competition: Option<String>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.sport().is_none() && self.category().is_none() && self.competition().is_none()
    }

    fn sport(&self) -> Option<&str> {
        self.sport.as_deref().filter(|key| !key.is_empty())
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|key| !key.is_empty())
    }

    fn competition(&self) -> Option<&str> {
        self.competition.as_deref().filter(|key| !key.is_empty())
    }
}

/// Row counts of the canonical collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub sports: usize,
    pub categories: usize,
    pub competitions: usize,
    pub events: usize,
    pub active_events: usize,
}

#[derive(Default)]
struct CatalogState {
    sports: Vec<Sport>,
    sport_positions: HashMap<String, usize>,
    categories: Vec<Category>,
    category_positions: HashMap<String, usize>,
    competitions: Vec<Competition>,
    competition_positions: HashMap<String, usize>,
    events: Vec<Event>,
    event_positions: HashMap<String, usize>,

    sport_categories: HashMap<String, Vec<String>>,
    sport_competitions: HashMap<String, Vec<String>>,
    sport_events: HashMap<String, Vec<String>>,
    category_events: HashMap<String, Vec<String>>,
    competition_events: HashMap<String, Vec<String>>,
}

impl CatalogState {
    fn event(&self, key: &str) -> Option<&Event> {
        self.event_positions.get(key).map(|&pos| &self.events[pos])
    }

    /// Average live duration in milliseconds of the sport's events that
    /// have both a start and an inactive time. NaN when there are none.
    fn live_time(&self, sport_key: &str) -> f64 {
        let mut total_ms: i64 = 0;
        let mut count: u32 = 0;

        for key in self.sport_events.get(sport_key).into_iter().flatten() {
            let Some(event) = self.event(key) else {
                continue;
            };
            if event.sport().key() != sport_key {
                continue;
            }
            if let Some(duration) = event.live_duration() {
                total_ms += duration.num_milliseconds();
                count += 1;
            }
        }

        total_ms as f64 / f64::from(count)
    }

    fn sport_with_live_time(&self, sport: &Sport) -> Sport {
        let mut sport = sport.clone();
        sport.set_live_time(self.live_time(sport.key()));
        sport
    }

    fn ensure_parents(&mut self, event: &Event) {
        let sport_key = event.sport().key();
        let category_key = event.category().key();
        let competition_key = event.competition().key();

        if !self.sport_positions.contains_key(sport_key) {
            self.sport_positions
                .insert(sport_key.to_string(), self.sports.len());
            self.sports
                .push(Sport::new(event.sport().name(), sport_key, 0.0));
        }

        if !self.category_positions.contains_key(category_key) {
            self.category_positions
                .insert(category_key.to_string(), self.categories.len());
            self.categories
                .push(Category::new(event.category().name(), category_key));
        }
        push_unique(
            self.sport_categories.entry(sport_key.to_string()).or_default(),
            category_key,
        );

        if !self.competition_positions.contains_key(competition_key) {
            self.competition_positions
                .insert(competition_key.to_string(), self.competitions.len());
            self.competitions
                .push(Competition::new(event.competition().name(), competition_key));
        }
        push_unique(
            self.sport_competitions.entry(sport_key.to_string()).or_default(),
            competition_key,
        );
    }

    fn link_event(&mut self, event: &Event) {
        let key = event.key();
        push_unique(
            self.sport_events.entry(event.sport().key().to_string()).or_default(),
            key,
        );
        push_unique(
            self.category_events
                .entry(event.category().key().to_string())
                .or_default(),
            key,
        );
        push_unique(
            self.competition_events
                .entry(event.competition().key().to_string())
                .or_default(),
            key,
        );
    }

    /// Drop index memberships of `stored` that `fresh` no longer shares
    fn unlink_moved_parents(&mut self, stored: &Event, fresh: &Event) {
        let key = stored.key();
        let moves = [
            (&mut self.sport_events, stored.sport().key(), fresh.sport().key()),
            (&mut self.category_events, stored.category().key(), fresh.category().key()),
            (
                &mut self.competition_events,
                stored.competition().key(),
                fresh.competition().key(),
            ),
        ];

        for (index, old_parent, new_parent) in moves {
            if old_parent == new_parent {
                continue;
            }
            if let Some(children) = index.get_mut(old_parent) {
                children.retain(|child| child != key);
            }
        }
    }
}

/// Indexed in-memory catalog, shared behind an `Arc` by the sync service
/// and the query side.
#[derive(Default)]
pub struct CatalogStore {
    state: RwLock<CatalogState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== WRITE OPERATIONS ====================

    /// Insert or refresh an event together with its parents and index entries.
    ///
    /// A refresh replaces the event body but keeps its lifecycle fields, see
    /// [`Event::inactivate`] for the only way to end trading.
    pub fn upsert(&self, event: Event) -> UpsertOutcome {
        let mut state = self.state.write();

        state.ensure_parents(&event);
        state.link_event(&event);

        match state.event_positions.get(event.key()).copied() {
            Some(pos) => {
                let stored = state.events[pos].clone();
                state.unlink_moved_parents(&stored, &event);
                state.events[pos].refresh_from(event);
                UpsertOutcome::Updated
            }
            None => {
                debug!(event_key = %event.key(), "Storing new event");
                let pos = state.events.len();
                state.event_positions.insert(event.key().to_string(), pos);
                state.events.push(event);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Mark a stored event inactive at the current time.
    ///
    /// Returns `false` when the event was already inactive.
    pub fn inactivate_event(&self, key: &str) -> Result<bool> {
        self.inactivate_event_at(key, Utc::now())
    }

    pub fn inactivate_event_at(&self, key: &str, now: DateTime<Utc>) -> Result<bool> {
        let mut state = self.state.write();
        let pos = state
            .event_positions
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::NotFound(format!("event {key}")))?;

        Ok(state.events[pos].inactivate(now))
    }

    // ==================== SPORT OPERATIONS ====================

    pub fn list_sports(&self, page_size: usize, page: usize) -> Result<Vec<Sport>> {
        let state = self.state.read();
        if state.sports.is_empty() {
            return Err(StoreError::NotFound("sports".to_string()));
        }

        let range = page_range(state.sports.len(), page_size, page)?;
        Ok(state.sports[range]
            .iter()
            .map(|sport| state.sport_with_live_time(sport))
            .collect())
    }

    pub fn get_sport(&self, key: &str) -> Result<Sport> {
        let state = self.state.read();
        let pos = state
            .sport_positions
            .get(key)
            .ok_or_else(|| StoreError::NotFound(format!("sport {key}")))?;

        Ok(state.sport_with_live_time(&state.sports[*pos]))
    }

    // ==================== CATEGORY OPERATIONS ====================

    pub fn list_categories(
        &self,
        page_size: usize,
        page: usize,
        sport_key: Option<&str>,
    ) -> Result<Vec<Category>> {
        let state = self.state.read();
        if state.categories.is_empty() {
            return Err(StoreError::NotFound("categories".to_string()));
        }

        match sport_key.filter(|key| !key.is_empty()) {
            None => {
                let range = page_range(state.categories.len(), page_size, page)?;
                Ok(state.categories[range].to_vec())
            }
            Some(sport_key) => {
                let keys = state
                    .sport_categories
                    .get(sport_key)
                    .ok_or_else(|| StoreError::NotFound(format!("categories of sport {sport_key}")))?;
                let range = page_range(keys.len(), page_size, page)?;

                Ok(keys[range]
                    .iter()
                    .filter_map(|key| state.category_positions.get(key))
                    .map(|&pos| state.categories[pos].clone())
                    .collect())
            }
        }
    }

    pub fn get_category(&self, key: &str) -> Result<Category> {
        let state = self.state.read();
        state
            .category_positions
            .get(key)
            .map(|&pos| state.categories[pos].clone())
            .ok_or_else(|| StoreError::NotFound(format!("category {key}")))
    }

    // ==================== COMPETITION OPERATIONS ====================

    pub fn list_competitions(
        &self,
        page_size: usize,
        page: usize,
        sport_key: Option<&str>,
    ) -> Result<Vec<Competition>> {
        let state = self.state.read();
        if state.competitions.is_empty() {
            return Err(StoreError::NotFound("competitions".to_string()));
        }

        match sport_key.filter(|key| !key.is_empty()) {
            None => {
                let range = page_range(state.competitions.len(), page_size, page)?;
                Ok(state.competitions[range].to_vec())
            }
            Some(sport_key) => {
                let keys = state.sport_competitions.get(sport_key).ok_or_else(|| {
                    StoreError::NotFound(format!("competitions of sport {sport_key}"))
                })?;
                let range = page_range(keys.len(), page_size, page)?;

                Ok(keys[range]
                    .iter()
                    .filter_map(|key| state.competition_positions.get(key))
                    .map(|&pos| state.competitions[pos].clone())
                    .collect())
            }
        }
    }

    pub fn get_competition(&self, key: &str) -> Result<Competition> {
        let state = self.state.read();
        state
            .competition_positions
            .get(key)
            .map(|&pos| state.competitions[pos].clone())
            .ok_or_else(|| StoreError::NotFound(format!("competition {key}")))
    }

    // ==================== EVENT OPERATIONS ====================

    /// Page through events, optionally restricted to the intersection of
    /// the sport, category and competition filters.
    pub fn list_events(
        &self,
        page_size: usize,
        page: usize,
        filter: &EventFilter,
    ) -> Result<Vec<Event>> {
        let state = self.state.read();
        if state.events.is_empty() {
            return Err(StoreError::NotFound("events".to_string()));
        }

        if filter.is_empty() {
            let range = page_range(state.events.len(), page_size, page)?;
            return Ok(state.events[range].to_vec());
        }

        let lookups = [
            ("sport", filter.sport(), &state.sport_events),
            ("category", filter.category(), &state.category_events),
            ("competition", filter.competition(), &state.competition_events),
        ];

        let mut targets: Option<Vec<String>> = None;
        for (kind, key, index) in lookups {
            let Some(key) = key else {
                continue;
            };
            let children = index
                .get(key)
                .ok_or_else(|| StoreError::NotFound(format!("events of {kind} {key}")))?;

            let narrowed = match targets {
                None => children.clone(),
                Some(current) => intersection(&current, children),
            };
            if narrowed.is_empty() {
                return Err(StoreError::NotFound("events matching filters".to_string()));
            }
            targets = Some(narrowed);
        }

        let targets = targets.unwrap_or_default();
        let range = page_range(targets.len(), page_size, page)?;

        Ok(targets[range]
            .iter()
            .filter_map(|key| state.event(key))
            .cloned()
            .collect())
    }

    pub fn get_event(&self, key: &str) -> Result<Event> {
        let state = self.state.read();
        state
            .event(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("event {key}")))
    }

    /// Active events whose cutoff is less than five minutes away
    pub fn list_events_cutoff_soon(&self) -> Vec<Event> {
        self.list_events_cutoff_before(Utc::now() + Duration::seconds(CUTOFF_SOON_WINDOW_SECS))
    }

    /// Active events whose cutoff is before `deadline`
    pub fn list_events_cutoff_before(&self, deadline: DateTime<Utc>) -> Vec<Event> {
        let state = self.state.read();
        state
            .events
            .iter()
            .filter(|event| event.is_active() && event.cutoff_time() < deadline)
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let state = self.state.read();
        CatalogStats {
            sports: state.sports.len(),
            categories: state.categories.len(),
            competitions: state.competitions.len(),
            events: state.events.len(),
            active_events: state.events.iter().filter(|e| e.is_active()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventDraft, Identifier};
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap()
    }

    fn event_at(
        key: &str,
        sport: &str,
        category: &str,
        competition: &str,
        active: bool,
        now: DateTime<Utc>,
    ) -> Event {
        Event::new_at(
            EventDraft {
                sport: Some(Identifier::new(sport.to_uppercase(), sport).unwrap()),
                category: Some(Identifier::new(category.to_uppercase(), category).unwrap()),
                competition: Some(Identifier::new(competition.to_uppercase(), competition).unwrap()),
                active,
                name: format!("Event {key}"),
                key: key.to_string(),
                cutoff_time: Some(now + Duration::hours(2)),
                ..Default::default()
            },
            now,
        )
        .unwrap()
    }

    fn event(key: &str, sport: &str, category: &str, competition: &str) -> Event {
        event_at(key, sport, category, competition, true, t0())
    }

    fn keys(events: &[Event]) -> Vec<&str> {
        events.iter().map(Event::key).collect()
    }

    fn filter(sport: &str, category: &str, competition: &str) -> EventFilter {
        EventFilter {
            sport: Some(sport.to_string()),
            category: Some(category.to_string()),
            competition: Some(competition.to_string()),
        }
    }

    #[test]
    fn test_upsert_creates_parents_and_indices() {
        let store = CatalogStore::new();
        assert_eq!(store.upsert(event("e1", "tennis", "atp", "roland-garros")), UpsertOutcome::Inserted);

        assert_eq!(store.get_sport("tennis").unwrap().name(), "TENNIS");
        assert_eq!(store.get_category("atp").unwrap().name(), "ATP");
        assert_eq!(store.get_competition("roland-garros").unwrap().key(), "roland-garros");
        assert_eq!(store.get_event("e1").unwrap().name(), "Event e1");

        let categories = store.list_categories(10, 1, Some("tennis")).unwrap();
        assert_eq!(categories.len(), 1);
        let competitions = store.list_competitions(10, 1, Some("tennis")).unwrap();
        assert_eq!(competitions.len(), 1);
    }

    #[test]
    fn test_upsert_twice_keeps_single_index_membership() {
        let store = CatalogStore::new();
        store.upsert(event("e1", "tennis", "atp", "roland-garros"));
        assert_eq!(store.upsert(event("e1", "tennis", "atp", "roland-garros")), UpsertOutcome::Updated);

        let state = store.state.read();
        for index in [
            &state.sport_events["tennis"],
            &state.category_events["atp"],
            &state.competition_events["roland-garros"],
        ] {
            assert_eq!(index, &vec!["e1".to_string()]);
        }
        assert_eq!(state.sport_categories["tennis"], vec!["atp".to_string()]);
        assert_eq!(state.sport_competitions["tennis"], vec!["roland-garros".to_string()]);
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.sports.len(), 1);
    }

    #[test]
    fn test_upsert_overwrites_body_and_keeps_lifecycle() {
        let store = CatalogStore::new();
        store.upsert(event_at("e1", "tennis", "atp", "rg", true, t0()));
        store
            .inactivate_event_at("e1", t0() + Duration::seconds(5))
            .unwrap();

        let mut fresh = EventDraft {
            sport: Some(Identifier::new("Tennis", "tennis").unwrap()),
            category: Some(Identifier::new("ATP", "atp").unwrap()),
            competition: Some(Identifier::new("RG", "rg").unwrap()),
            active: true,
            name: "Renamed".to_string(),
            key: "e1".to_string(),
            cutoff_time: Some(t0() + Duration::hours(3)),
            ..Default::default()
        };
        fresh.home = crate::domain::TeamIdentifier::new("Nadal", "nadal", "NAD", "ES");
        store.upsert(Event::new_at(fresh, t0() + Duration::hours(1)).unwrap());

        let stored = store.get_event("e1").unwrap();
        assert_eq!(stored.name(), "Renamed");
        assert_eq!(stored.home().key(), "nadal");
        assert!(!stored.is_active());
        assert_eq!(stored.start_trading_live_time(), Some(t0()));
        assert_eq!(stored.inactive_time(), Some(t0() + Duration::seconds(5)));
    }

    #[test]
    fn test_upsert_moves_event_between_parents() {
        let store = CatalogStore::new();
        store.upsert(event("e1", "tennis", "atp", "rg"));
        store.upsert(event("e1", "tennis", "atp", "wimbledon"));

        assert!(matches!(
            store.list_events(10, 1, &filter("", "", "rg")),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(keys(&store.list_events(10, 1, &filter("", "", "wimbledon")).unwrap()), vec!["e1"]);
    }

    #[test]
    fn test_empty_store_reports_not_found() {
        let store = CatalogStore::new();
        assert!(matches!(store.list_sports(10, 1), Err(StoreError::NotFound(_))));
        assert!(matches!(store.list_categories(10, 1, None), Err(StoreError::NotFound(_))));
        assert!(matches!(store.list_competitions(10, 1, None), Err(StoreError::NotFound(_))));
        assert!(matches!(store.list_events(10, 1, &EventFilter::default()), Err(StoreError::NotFound(_))));
        assert!(matches!(store.get_sport("tennis"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.get_event("e1"), Err(StoreError::NotFound(_))));
        assert!(store.list_events_cutoff_soon().is_empty());
    }

    #[test]
    fn test_pagination_bounds() {
        let store = CatalogStore::new();
        for i in 0..7 {
            store.upsert(event(&format!("e{i}"), "tennis", "atp", "rg"));
        }

        // ceil(7 / 3) = 3 pages, the last one holds 7 mod 3 = 1 event
        assert_eq!(store.list_events(3, 1, &EventFilter::default()).unwrap().len(), 3);
        assert_eq!(keys(&store.list_events(3, 3, &EventFilter::default()).unwrap()), vec!["e6"]);
        assert!(matches!(
            store.list_events(3, 4, &EventFilter::default()),
            Err(StoreError::OutOfRange { page: 4, page_size: 3, total: 7 })
        ));

        // filtered path uses the same bounds
        let by_sport = filter("tennis", "", "");
        assert_eq!(store.list_events(7, 1, &by_sport).unwrap().len(), 7);
        assert!(matches!(store.list_events(7, 2, &by_sport), Err(StoreError::OutOfRange { .. })));
    }

    #[test]
    fn test_list_sports_pages() {
        let store = CatalogStore::new();
        for sport in ["tennis", "soccer", "darts", "golf"] {
            store.upsert(event(&format!("{sport}-e"), sport, "cat", "comp"));
        }

        let page = store.list_sports(2, 2).unwrap();
        let sport_keys: Vec<&str> = page.iter().map(Sport::key).collect();
        assert_eq!(sport_keys, vec!["darts", "golf"]);
        assert!(matches!(store.list_sports(2, 3), Err(StoreError::OutOfRange { .. })));
    }

    #[test]
    fn test_filter_intersection() {
        let store = CatalogStore::new();
        store.upsert(event("e1", "a", "x", "c1"));
        store.upsert(event("e2", "a", "y", "c2"));
        store.upsert(event("e3", "b", "x", "c3"));

        let events = store.list_events(10, 1, &filter("a", "x", "")).unwrap();
        assert_eq!(keys(&events), vec!["e1"]);

        let events = store.list_events(10, 1, &filter("", "x", "")).unwrap();
        assert_eq!(keys(&events), vec!["e1", "e3"]);

        assert!(matches!(
            store.list_events(10, 1, &filter("b", "y", "")),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.list_events(10, 1, &filter("a", "", "unknown")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_filtered_children_unknown_sport() {
        let store = CatalogStore::new();
        store.upsert(event("e1", "tennis", "atp", "rg"));

        assert!(matches!(store.list_categories(10, 1, Some("golf")), Err(StoreError::NotFound(_))));
        assert!(matches!(store.list_competitions(10, 1, Some("golf")), Err(StoreError::NotFound(_))));
        // an empty sport key means unfiltered
        assert_eq!(store.list_categories(10, 1, Some("")).unwrap().len(), 1);
    }

    #[test]
    fn test_live_time_average() {
        let store = CatalogStore::new();
        store.upsert(event_at("e1", "tennis", "atp", "rg", true, t0()));
        store.upsert(event_at("e2", "tennis", "atp", "rg", true, t0()));
        store.upsert(event_at("e3", "tennis", "atp", "rg", true, t0()));

        store.inactivate_event_at("e1", t0() + Duration::milliseconds(2000)).unwrap();
        store.inactivate_event_at("e2", t0() + Duration::milliseconds(4000)).unwrap();

        // e3 is still live and does not count
        let sport = store.get_sport("tennis").unwrap();
        assert_eq!(sport.live_time(), 3000.0);
        assert_eq!(store.list_sports(10, 1).unwrap()[0].live_time(), 3000.0);
    }

    #[test]
    fn test_live_time_single_event() {
        let store = CatalogStore::new();
        store.upsert(event_at("e1", "tennis", "atp", "rg", true, t0()));
        store.inactivate_event_at("e1", t0() + Duration::milliseconds(2000)).unwrap();

        assert_eq!(store.get_sport("tennis").unwrap().live_time(), 2000.0);
    }

    #[test]
    fn test_live_time_without_data_is_nan() {
        let store = CatalogStore::new();
        store.upsert(event_at("e1", "tennis", "atp", "rg", true, t0()));
        store.upsert(event_at("e2", "tennis", "atp", "rg", false, t0()));
        store.inactivate_event_at("e2", t0() + Duration::seconds(1)).unwrap();

        let sport = store.get_sport("tennis").unwrap();
        assert!(sport.live_time().is_nan());
        assert!(!sport.has_live_time());
    }

    #[test]
    fn test_inactivate_event() {
        let store = CatalogStore::new();
        store.upsert(event("e1", "tennis", "atp", "rg"));

        assert_eq!(store.inactivate_event("e1"), Ok(true));
        assert_eq!(store.inactivate_event("e1"), Ok(false));
        assert!(matches!(store.inactivate_event("missing"), Err(StoreError::NotFound(_))));

        let stored = store.get_event("e1").unwrap();
        assert!(!stored.is_active());
        assert!(stored.inactive_time().is_some());
    }

    #[test]
    fn test_cutoff_soon_excludes_inactive_and_distant_events() {
        let store = CatalogStore::new();
        let now = Utc::now();
        let due_soon = |key: &str| {
            Event::new_at(
                EventDraft {
                    sport: Some(Identifier::new("Tennis", "tennis").unwrap()),
                    category: Some(Identifier::new("ATP", "atp").unwrap()),
                    competition: Some(Identifier::new("RG", "rg").unwrap()),
                    active: true,
                    key: key.to_string(),
                    cutoff_time: Some(now + Duration::minutes(2)),
                    ..Default::default()
                },
                now,
            )
            .unwrap()
        };

        store.upsert(due_soon("soon"));
        store.upsert(due_soon("closed"));
        store.upsert(event_at("later", "tennis", "atp", "rg", true, now));
        store.inactivate_event("closed").unwrap();

        assert_eq!(keys(&store.list_events_cutoff_soon()), vec!["soon"]);
    }

    #[test]
    fn test_stats() {
        let store = CatalogStore::new();
        store.upsert(event("e1", "tennis", "atp", "rg"));
        store.upsert(event("e2", "tennis", "wta", "rg"));
        store.inactivate_event("e2").unwrap();

        assert_eq!(
            store.stats(),
            CatalogStats {
                sports: 1,
                categories: 2,
                competitions: 1,
                events: 2,
                active_events: 1,
            }
        );
    }

    #[test]
    fn test_concurrent_readers_see_consistent_indices() {
        let store = CatalogStore::new();
        store.upsert(event("moving", "tennis", "atp", "c1"));
        store.upsert(event("anchor", "tennis", "atp", "c1"));
        store.upsert(event("other", "tennis", "atp", "c2"));

        let by_competition = EventFilter {
            sport: Some("tennis".to_string()),
            category: None,
            competition: Some("c1".to_string()),
        };

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..500 {
                    let competition = if i % 2 == 0 { "c2" } else { "c1" };
                    store.upsert(event("moving", "tennis", "atp", competition));
                }
            });

            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..500 {
                        match store.list_events(50, 1, &by_competition) {
                            Ok(events) => {
                                assert!(!events.is_empty());
                                for event in &events {
                                    assert_eq!(event.competition().key(), "c1");
                                }
                            }
                            Err(e) => assert!(matches!(e, StoreError::NotFound(_)), "{e}"),
                        }
                    }
                });
            }
        });

        // Last write moved it back under c1, behind the anchor
        let events = store.list_events(50, 1, &by_competition).unwrap();
        assert_eq!(keys(&events), vec!["anchor", "moving"]);
    }
}
