//! Domain Layer
//!
//! Contains pure catalog entities and their validation rules.
//! This layer has no dependencies on infrastructure or application layers.

pub mod catalog;
pub mod error;
pub mod event;
pub mod identifier;

pub use catalog::{Category, Competition, Sport};
pub use error::ValidationError;
pub use event::{
    is_trading_status, Event, EventDraft, Market, Selection, Submarket, TRADING_STATUSES,
};
pub use identifier::{Identifier, TeamIdentifier};
