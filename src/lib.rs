//! Dua catalog: read-only REST API over a SQLite catalog of categories, sub-categories and duas.

pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use case::token_to_display_name;
pub use config::{CorsOrigins, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{DuaEntry, DuaFilter, DuaQuery};
pub use response::OneOrMany;
pub use routes::{app_router, catalog_routes, common_routes};
pub use service::{DuaParams, QueryResolver};
pub use state::AppState;
pub use store::{CatalogStore, SqliteCatalog};
