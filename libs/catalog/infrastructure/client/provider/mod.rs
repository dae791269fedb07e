//! Odds provider client and wire types
//!
//! The provider exposes its catalog as a tree: sports, the categories and
//! competitions of one sport, the events of one competition, and single
//! events by key.

pub mod client;
pub mod traits;
pub mod types;

pub use client::{ProviderClient, ProviderError};
pub use traits::OddsProvider;
pub use types::{
    CategoryEntry, CompetitionEvents, CompetitionSummary, RawEvent, RawIdentifier, RawMarket,
    RawSelection, RawSubmarket, RawTeam, SportSummary, SportWithCategories, SportsResponse,
};
