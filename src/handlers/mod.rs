//! HTTP handlers for the catalog routes.

pub mod catalog;
pub use catalog::*;
