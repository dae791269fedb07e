//! Read-side use cases
//!
//! Validates paging input and keys before touching the store and maps
//! domain values to the DTOs served over HTTP.

pub mod dto;

use crate::infrastructure::store::{CatalogStore, EventFilter, StoreError};
use std::sync::Arc;
use thiserror::Error;

pub use dto::{
    CategoryDto, CompetitionDto, EventDto, IdentifierDto, MarketDto, SelectionDto, SelectionSide,
    SelectionStatus, SportDto, TeamDto,
};

/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("size cannot be smaller than 1 or larger than {max}", max = MAX_PAGE_SIZE)]
    InvalidPageSize(usize),

    #[error("page cannot be smaller than 1")]
    InvalidPage,

    #[error("missing key")]
    MissingKey,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, QueryError>;

fn check_paging(page_size: usize, page: usize) -> Result<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(QueryError::InvalidPageSize(page_size));
    }
    if page == 0 {
        return Err(QueryError::InvalidPage);
    }
    Ok(())
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(QueryError::MissingKey);
    }
    Ok(())
}

#[derive(Clone)]
pub struct CatalogQueries {
    store: Arc<CatalogStore>,
}

impl CatalogQueries {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub fn list_sports(&self, page_size: usize, page: usize) -> Result<Vec<SportDto>> {
        check_paging(page_size, page)?;
        let sports = self.store.list_sports(page_size, page)?;
        Ok(sports.into_iter().map(SportDto::from).collect())
    }

    pub fn get_sport(&self, key: &str) -> Result<SportDto> {
        check_key(key)?;
        Ok(self.store.get_sport(key)?.into())
    }

    pub fn list_categories(
        &self,
        page_size: usize,
        page: usize,
        sport: Option<&str>,
    ) -> Result<Vec<CategoryDto>> {
        check_paging(page_size, page)?;
        let categories = self.store.list_categories(page_size, page, sport)?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub fn get_category(&self, key: &str) -> Result<CategoryDto> {
        check_key(key)?;
        Ok(self.store.get_category(key)?.into())
    }

    pub fn list_competitions(
        &self,
        page_size: usize,
        page: usize,
        sport: Option<&str>,
    ) -> Result<Vec<CompetitionDto>> {
        check_paging(page_size, page)?;
        let competitions = self.store.list_competitions(page_size, page, sport)?;
        Ok(competitions.into_iter().map(CompetitionDto::from).collect())
    }

    pub fn get_competition(&self, key: &str) -> Result<CompetitionDto> {
        check_key(key)?;
        Ok(self.store.get_competition(key)?.into())
    }

    pub fn list_events(
        &self,
        page_size: usize,
        page: usize,
        filter: &EventFilter,
    ) -> Result<Vec<EventDto>> {
        check_paging(page_size, page)?;
        let events = self.store.list_events(page_size, page, filter)?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }

    pub fn get_event(&self, key: &str) -> Result<EventDto> {
        check_key(key)?;
        Ok(self.store.get_event(key)?.into())
    }
}
