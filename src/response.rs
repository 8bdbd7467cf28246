//! Response bodies shared by handlers.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Every error response is `{"error": "<message>"}`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// Either a single row (fully specified lookup) or a row set.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Serialize> IntoResponse for OneOrMany<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
