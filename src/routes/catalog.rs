//! Catalog routes. The category token is a path segment; filters arrive in the query string.

use crate::handlers::catalog::{list_categories, list_duas, list_sub_categories, missing_category};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/sub_categories", get(list_sub_categories))
        .route("/duas", get(missing_category))
        .route("/duas/", get(missing_category))
        .route("/duas/:cat_name_en", get(list_duas))
        .with_state(state)
}
