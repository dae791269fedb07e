use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/sports", get(handlers::list_sports))
        .route("/sports/:key", get(handlers::get_sport))
        .route("/categories", get(handlers::list_categories))
        .route("/categories/:key", get(handlers::get_category))
        .route("/competitions", get(handlers::list_competitions))
        .route("/competitions/:key", get(handlers::get_competition))
        .route("/events", get(handlers::list_events))
        .route("/events/:key", get(handlers::get_event));

    Router::new()
        .nest("/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
