//! Response shapes served by the query side

use crate::domain::{Category, Competition, Event, Identifier, Market, Selection, Sport, TeamIdentifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportDto {
    pub key: String,
    pub name: String,
    /// Average live duration in milliseconds, 0 when unknown
    pub live_time: f64,
}

impl From<Sport> for SportDto {
    fn from(sport: Sport) -> Self {
        let live_time = if sport.has_live_time() {
            sport.live_time()
        } else {
            0.0
        };
        Self {
            key: sport.key().to_string(),
            name: sport.name().to_string(),
            live_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub key: String,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            key: category.key().to_string(),
            name: category.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionDto {
    pub key: String,
    pub name: String,
}

impl From<Competition> for CompetitionDto {
    fn from(competition: Competition) -> Self {
        Self {
            key: competition.key().to_string(),
            name: competition.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierDto {
    pub key: String,
    pub name: String,
}

impl From<&Identifier> for IdentifierDto {
    fn from(identifier: &Identifier) -> Self {
        Self {
            key: identifier.key().to_string(),
            name: identifier.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDto {
    pub key: String,
    pub name: String,
    pub abbreviation: String,
    pub nationality: String,
}

impl From<&TeamIdentifier> for TeamDto {
    fn from(team: &TeamIdentifier) -> Self {
        Self {
            key: team.key().to_string(),
            name: team.name().to_string(),
            abbreviation: team.abbreviation().to_string(),
            nationality: team.nationality().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStatus {
    #[serde(rename = "SELECTION_ENABLED")]
    Enabled,
    #[serde(rename = "SELECTION_DISABLED")]
    Disabled,
}

impl SelectionStatus {
    fn from_raw(status: &str) -> Self {
        match status {
            "SELECTION_DISABLED" => SelectionStatus::Disabled,
            _ => SelectionStatus::Enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SelectionSide {
    Back,
    Lay,
}

impl SelectionSide {
    fn from_raw(side: &str) -> Self {
        match side {
            "BACK" => SelectionSide::Back,
            _ => SelectionSide::Lay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    pub outcome: String,
    pub params: String,
    pub price: f64,
    pub max_stake: f64,
    pub probability: f64,
    pub status: SelectionStatus,
    pub side: SelectionSide,
}

impl From<&Selection> for SelectionDto {
    fn from(selection: &Selection) -> Self {
        Self {
            outcome: selection.outcome.clone(),
            params: selection.params.clone(),
            price: selection.price,
            max_stake: selection.max_stake,
            probability: selection.probability,
            status: SelectionStatus::from_raw(&selection.status),
            side: SelectionSide::from_raw(&selection.side),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDto {
    pub submarkets: BTreeMap<String, Vec<SelectionDto>>,
}

impl From<&Market> for MarketDto {
    fn from(market: &Market) -> Self {
        let submarkets = market
            .submarkets()
            .iter()
            .map(|(key, sub)| (key.clone(), sub.selections.iter().map(SelectionDto::from).collect()))
            .collect();
        Self { submarkets }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub key: String,
    pub name: String,
    pub sport: IdentifierDto,
    pub category: IdentifierDto,
    pub competition: IdentifierDto,
    pub home: TeamDto,
    pub away: TeamDto,
    pub active: bool,
    pub market: BTreeMap<String, MarketDto>,
    /// RFC3339
    pub cut_off_time: String,
    /// RFC3339, empty when the event never traded live
    pub start_trading_live_time: String,
    /// RFC3339, empty while trading
    pub inactive_time: String,
}

fn rfc3339(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339()).unwrap_or_default()
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            key: event.key().to_string(),
            name: event.name().to_string(),
            sport: event.sport().into(),
            category: event.category().into(),
            competition: event.competition().into(),
            home: event.home().into(),
            away: event.away().into(),
            active: event.is_active(),
            market: event
                .markets()
                .iter()
                .map(|(key, market)| (key.clone(), market.into()))
                .collect(),
            cut_off_time: rfc3339(Some(event.cutoff_time())),
            start_trading_live_time: rfc3339(event.start_trading_live_time()),
            inactive_time: rfc3339(event.inactive_time()),
        }
    }
}
