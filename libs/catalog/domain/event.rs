//! Event aggregate
//!
//! An event carries denormalized copies of its sport, category and
//! competition identifiers, the two sides, the odds tree
//! (markets → submarkets → selections) and its trading lifecycle.

use super::error::ValidationError;
use super::identifier::{Identifier, TeamIdentifier};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Provider statuses under which an event counts as trading
pub const TRADING_STATUSES: [&str; 2] = ["TRADING", "TRADING_LIVE"];

/// Whether a provider event status means the event is still trading
pub fn is_trading_status(status: &str) -> bool {
    TRADING_STATUSES.contains(&status)
}

/// Leaf odds record
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub outcome: String,
    /// Bet placement parameters such as handicap or period
    pub params: String,
    pub price: f64,
    /// Maximum stake in EUR
    pub max_stake: f64,
    pub probability: f64,
    /// Raw provider status, e.g. `SELECTION_ENABLED`
    pub status: String,
    /// `BACK` or `LAY`
    pub side: String,
}

/// Ordered selections of one submarket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submarket {
    /// Provider update sequence; carried as received, not used for ordering
    pub sequence: String,
    pub selections: Vec<Selection>,
}

impl Submarket {
    pub fn new(sequence: impl Into<String>, selections: Vec<Selection>) -> Self {
        Self {
            sequence: sequence.into(),
            selections,
        }
    }
}

/// Submarkets of one market keyed by submarket slug
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Market {
    submarkets: BTreeMap<String, Submarket>,
}

impl Market {
    pub fn new(submarkets: BTreeMap<String, Submarket>) -> Self {
        Self { submarkets }
    }

    pub fn submarkets(&self) -> &BTreeMap<String, Submarket> {
        &self.submarkets
    }

    pub fn submarket(&self, key: &str) -> Option<&Submarket> {
        self.submarkets.get(key)
    }

    /// Replace the selections of one submarket
    pub fn update_selections(&mut self, key: impl Into<String>, selections: Vec<Selection>) {
        self.submarkets.entry(key.into()).or_default().selections = selections;
    }
}

/// Unvalidated event fields, turned into an [`Event`] by [`Event::new`]
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub sport: Option<Identifier>,
    pub competition: Option<Identifier>,
    pub category: Option<Identifier>,
    pub home: TeamIdentifier,
    pub away: TeamIdentifier,
    pub active: bool,
    pub markets: BTreeMap<String, Market>,
    pub name: String,
    pub key: String,
    pub cutoff_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    sport: Identifier,
    competition: Identifier,
    category: Identifier,
    home: TeamIdentifier,
    away: TeamIdentifier,
    active: bool,
    markets: BTreeMap<String, Market>,
    name: String,
    key: String,
    cutoff_time: DateTime<Utc>,
    start_trading_live_time: Option<DateTime<Utc>>,
    inactive_time: Option<DateTime<Utc>>,
}

impl Event {
    /// Validate a draft using the current time as creation time
    pub fn new(draft: EventDraft) -> Result<Self, ValidationError> {
        Self::new_at(draft, Utc::now())
    }

    /// Validate a draft. An event active at creation starts its live time at `now`.
    pub fn new_at(draft: EventDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        if draft.key.is_empty() {
            return Err(ValidationError::MissingKey);
        }
        let sport = draft.sport.ok_or(ValidationError::MissingSport)?;
        let competition = draft.competition.ok_or(ValidationError::MissingCompetition)?;
        let category = draft.category.ok_or(ValidationError::MissingCategory)?;
        let cutoff_time = draft.cutoff_time.ok_or(ValidationError::MissingCutoffTime)?;

        Ok(Self {
            sport,
            competition,
            category,
            home: draft.home,
            away: draft.away,
            active: draft.active,
            markets: draft.markets,
            name: draft.name,
            key: draft.key,
            cutoff_time,
            start_trading_live_time: draft.active.then_some(now),
            inactive_time: None,
        })
    }

    pub fn sport(&self) -> &Identifier {
        &self.sport
    }

    pub fn category(&self) -> &Identifier {
        &self.category
    }

    pub fn competition(&self) -> &Identifier {
        &self.competition
    }

    pub fn home(&self) -> &TeamIdentifier {
        &self.home
    }

    pub fn away(&self) -> &TeamIdentifier {
        &self.away
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn markets(&self) -> &BTreeMap<String, Market> {
        &self.markets
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cutoff_time(&self) -> DateTime<Utc> {
        self.cutoff_time
    }

    pub fn start_trading_live_time(&self) -> Option<DateTime<Utc>> {
        self.start_trading_live_time
    }

    pub fn inactive_time(&self) -> Option<DateTime<Utc>> {
        self.inactive_time
    }

    /// Time spent trading before inactivation, when both ends are known
    pub fn live_duration(&self) -> Option<Duration> {
        match (self.start_trading_live_time, self.inactive_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Stop trading this event.
    ///
    /// Returns `false` without touching the event when it is already
    /// inactive, so the first inactivation time is kept.
    pub fn inactivate(&mut self, now: DateTime<Utc>) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.inactive_time = Some(now);
        true
    }

    /// Take the body of a fresh sighting of the same event while keeping
    /// this event's lifecycle.
    ///
    /// The only lifecycle change accepted from `fresh` is activation of an
    /// event that has never been live.
    pub(crate) fn refresh_from(&mut self, fresh: Event) {
        let never_live = !self.active
            && self.start_trading_live_time.is_none()
            && self.inactive_time.is_none();
        let (active, start) = if never_live && fresh.active {
            (true, fresh.start_trading_live_time)
        } else {
            (self.active, self.start_trading_live_time)
        };
        let inactive_time = self.inactive_time;

        *self = Self {
            active,
            start_trading_live_time: start,
            inactive_time,
            ..fresh
        };
    }
}
