use super::error::ApiError;
use super::state::AppState;
use crate::application::query::{CategoryDto, CompetitionDto, EventDto, SportDto};
use crate::infrastructure::store::EventFilter;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

const DEFAULT_PAGE_SIZE: i64 = 10;
const DEFAULT_PAGE: i64 = 1;

/// Paging and parent filters shared by the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Page size
    pub first: Option<i64>,
    pub page: Option<i64>,
    pub sport: Option<String>,
    pub category: Option<String>,
    pub competition: Option<String>,
}

/// Malformed query strings surface as JSON `BAD_REQUEST` instead of axum's
/// plain-text rejection
type ListQuery = Result<Query<ListParams>, QueryRejection>;

impl ListParams {
    /// Non-positive values become 0 so validation rejects them
    fn paging(&self) -> (usize, usize) {
        let to_usize = |value: i64| usize::try_from(value).unwrap_or(0);
        (
            to_usize(self.first.unwrap_or(DEFAULT_PAGE_SIZE)),
            to_usize(self.page.unwrap_or(DEFAULT_PAGE)),
        )
    }
}

pub async fn list_sports(
    State(state): State<AppState>,
    params: ListQuery,
) -> Result<Json<Vec<SportDto>>, ApiError> {
    let Query(params) = params?;
    let (first, page) = params.paging();
    Ok(Json(state.queries.list_sports(first, page)?))
}

pub async fn get_sport(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SportDto>, ApiError> {
    Ok(Json(state.queries.get_sport(&key)?))
}

pub async fn list_categories(
    State(state): State<AppState>,
    params: ListQuery,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let Query(params) = params?;
    let (first, page) = params.paging();
    Ok(Json(state.queries.list_categories(
        first,
        page,
        params.sport.as_deref(),
    )?))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CategoryDto>, ApiError> {
    Ok(Json(state.queries.get_category(&key)?))
}

pub async fn list_competitions(
    State(state): State<AppState>,
    params: ListQuery,
) -> Result<Json<Vec<CompetitionDto>>, ApiError> {
    let Query(params) = params?;
    let (first, page) = params.paging();
    Ok(Json(state.queries.list_competitions(
        first,
        page,
        params.sport.as_deref(),
    )?))
}

pub async fn get_competition(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CompetitionDto>, ApiError> {
    Ok(Json(state.queries.get_competition(&key)?))
}

pub async fn list_events(
    State(state): State<AppState>,
    params: ListQuery,
) -> Result<Json<Vec<EventDto>>, ApiError> {
    let Query(params) = params?;
    let (first, page) = params.paging();
    let filter = EventFilter {
        sport: params.sport,
        category: params.category,
        competition: params.competition,
    };
    Ok(Json(state.queries.list_events(first, page, &filter)?))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EventDto>, ApiError> {
    Ok(Json(state.queries.get_event(&key)?))
}
