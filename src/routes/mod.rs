//! Router assembly: common and catalog routes behind CORS and request tracing.

mod catalog;
mod common;

pub use catalog::catalog_routes;
pub use common::{common_routes, LIVENESS_TEXT};

use crate::config::{CorsOrigins, ServerConfig};
use crate::error::ConfigError;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Full application router. Used by the binary and by integration tests.
pub fn app_router(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.cors_origins)?;
    Ok(Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors))
}

pub fn cors_layer(origins: &CorsOrigins) -> Result<CorsLayer, ConfigError> {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) => {
            let values = list
                .iter()
                .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidCorsOrigin(o.clone())))
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(values)
        }
    };
    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any))
}
