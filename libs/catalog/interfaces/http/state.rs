use crate::application::query::CatalogQueries;
use crate::infrastructure::store::CatalogStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: CatalogQueries,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            queries: CatalogQueries::new(store),
        }
    }
}
