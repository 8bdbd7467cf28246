//! QueryResolver: validates lookups and maps store results to outcomes.

mod resolver;
pub use resolver::{build_query, DuaParams, QueryResolver};
