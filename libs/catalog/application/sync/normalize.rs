//! Raw provider event → domain [`Event`]

use crate::domain::{
    is_trading_status, Event, EventDraft, Identifier, Market, Selection, Submarket,
    TeamIdentifier, ValidationError,
};
use crate::infrastructure::client::provider::{RawEvent, RawMarket, RawSelection, RawTeam};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("event {key}: invalid cutoff time {value:?}")]
    InvalidCutoffTime { key: String, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Build a domain event from a provider event found under the given tree
/// position. The parent identifiers come from the walk, not the event body.
pub fn normalize_event(
    raw: &RawEvent,
    sport: &Identifier,
    category: &Identifier,
    competition: &Identifier,
    now: DateTime<Utc>,
) -> Result<Event, NormalizeError> {
    let cutoff_time = parse_cutoff(raw)?;

    let draft = EventDraft {
        sport: Some(sport.clone()),
        competition: Some(competition.clone()),
        category: Some(category.clone()),
        home: team(raw.home.as_ref()),
        away: team(raw.away.as_ref()),
        active: is_trading_status(&raw.status),
        markets: markets(&raw.markets),
        name: raw.name.clone(),
        key: raw.key.clone(),
        cutoff_time,
    };

    Ok(Event::new_at(draft, now)?)
}

/// Empty cutoff leaves validation to report it as missing
fn parse_cutoff(raw: &RawEvent) -> Result<Option<DateTime<Utc>>, NormalizeError> {
    if raw.cutoff_time.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(&raw.cutoff_time)
        .map(|time| Some(time.with_timezone(&Utc)))
        .map_err(|_| NormalizeError::InvalidCutoffTime {
            key: raw.key.clone(),
            value: raw.cutoff_time.clone(),
        })
}

fn team(raw: Option<&RawTeam>) -> TeamIdentifier {
    raw.map(|team| {
        TeamIdentifier::new(
            team.name.as_str(),
            team.key.as_str(),
            team.abbreviation.as_str(),
            team.nationality.as_str(),
        )
    })
    .unwrap_or_default()
}

fn markets(raw: &std::collections::HashMap<String, RawMarket>) -> BTreeMap<String, Market> {
    raw.iter()
        .map(|(key, market)| {
            let submarkets = market
                .submarkets
                .iter()
                .map(|(sub_key, sub)| {
                    let selections = sub.selections.iter().map(selection).collect();
                    (sub_key.clone(), Submarket::new(sub.sequence.as_str(), selections))
                })
                .collect();
            (key.clone(), Market::new(submarkets))
        })
        .collect()
}

fn selection(raw: &RawSelection) -> Selection {
    Selection {
        outcome: raw.outcome.clone(),
        params: raw.params.clone(),
        price: raw.price,
        max_stake: raw.max_stake,
        probability: raw.probability,
        status: raw.status.clone(),
        side: raw.side.clone(),
    }
}
