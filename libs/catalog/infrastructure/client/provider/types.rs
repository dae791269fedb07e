use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body returned with a non-success status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub status: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportSummary {
    pub name: String,
    pub key: String,
    /// 0 indicates an inactive sport
    pub competition_count: u32,
    /// 0 indicates an inactive sport
    pub event_count: u32,
}

impl SportSummary {
    pub fn is_active(&self) -> bool {
        self.competition_count != 0 && self.event_count != 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SportsResponse {
    pub sports: Vec<SportSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitionSummary {
    pub name: String,
    /// `<sport-key>-<category-key>-<competition-key>`
    pub key: String,
    pub event_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryEntry {
    pub name: String,
    pub key: String,
    pub competitions: Vec<CompetitionSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SportWithCategories {
    pub name: String,
    pub key: String,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawIdentifier {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCompetition {
    pub name: String,
    pub key: String,
    pub category: Option<RawIdentifier>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTeam {
    pub name: String,
    pub key: String,
    pub abbreviation: String,
    /// Country code
    pub nationality: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSelection {
    pub outcome: String,
    pub params: String,
    pub price: f64,
    pub max_stake: f64,
    pub probability: f64,
    pub status: String,
    pub side: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSubmarket {
    pub sequence: String,
    pub selections: Vec<RawSelection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMarket {
    pub submarkets: HashMap<String, RawSubmarket>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutcomeProbability {
    pub outcome: String,
    pub probability: f32,
    pub market_key: String,
    pub params: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventMetadata {
    pub opinion: Vec<OutcomeProbability>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    pub sequence: String,
    pub id: i64,
    pub sport: Option<RawIdentifier>,
    pub competition: Option<RawCompetition>,
    pub home: Option<RawTeam>,
    pub away: Option<RawTeam>,
    /// e.g. `TRADING`, `TRADING_LIVE`, `RESULTED`
    pub status: String,
    pub markets: HashMap<String, RawMarket>,
    pub name: String,
    pub key: String,
    /// RFC3339 timestamp
    pub cutoff_time: String,
    pub metadata: Option<EventMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionEvents {
    pub name: String,
    pub key: String,
    pub sport: RawIdentifier,
    pub category: RawIdentifier,
    pub events: Vec<RawEvent>,
}
