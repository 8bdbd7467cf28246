//! Shared application state for all routes. The store is opened once at startup.

use crate::store::CatalogStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
