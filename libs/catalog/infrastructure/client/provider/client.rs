use super::traits::OddsProvider;
use super::types::{
    CompetitionEvents, ErrorBody, RawEvent, SportWithCategories, SportsResponse,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const API_KEY_HEADER: &str = "X-API-Key";
const ODDS_PATH: &str = "pub/v2/odds";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("[{status}] {message}")]
    Api { status: String, message: String },

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("Missing {0} key")]
    MissingKey(&'static str),
}

impl ProviderError {
    /// Whether the provider answered with a well-formed error body
    pub fn is_api_error(&self) -> bool {
        matches!(self, ProviderError::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// HTTP client for the odds provider's public feed
pub struct ProviderClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ProviderClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, ODDS_PATH, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        decode_response(status, &body)
    }
}

/// Decode a provider response body according to its status
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if status.is_success() {
        return serde_json::from_str(body)
            .map_err(|e| ProviderError::DeserializeFailed(e.to_string()));
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) if !error.error.is_empty() => Err(ProviderError::Api {
            status: error.status,
            message: error.error,
        }),
        _ => Err(ProviderError::UnexpectedStatus(status)),
    }
}

#[async_trait]
impl OddsProvider for ProviderClient {
    async fn fetch_all_sports(&self) -> Result<SportsResponse> {
        self.get("sports").await
    }

    async fn fetch_competitions_under_sport(&self, sport_key: &str) -> Result<SportWithCategories> {
        if sport_key.is_empty() {
            return Err(ProviderError::MissingKey("sport"));
        }
        self.get(&format!("sports/{sport_key}")).await
    }

    async fn fetch_events_under_competition(&self, competition_key: &str) -> Result<CompetitionEvents> {
        if competition_key.is_empty() {
            return Err(ProviderError::MissingKey("competition"));
        }
        self.get(&format!("competitions/{competition_key}")).await
    }

    async fn fetch_event(&self, event_key: &str) -> Result<RawEvent> {
        if event_key.is_empty() {
            return Err(ProviderError::MissingKey("event"));
        }
        self.get(&format!("events/{event_key}")).await
    }
}
