//! Catalog handlers: categories, sub-categories, and entry lookup.

use crate::error::AppError;
use crate::service::{DuaParams, QueryResolver};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};

pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = QueryResolver::list_categories(state.store.as_ref()).await?;
    Ok(Json(rows))
}

pub async fn list_sub_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = QueryResolver::list_sub_categories(state.store.as_ref()).await?;
    Ok(Json(rows))
}

/// GET /duas/:cat_name_en?cat=&subcat=&dua=
pub async fn list_duas(
    State(state): State<AppState>,
    cat_name_en: Result<Path<String>, PathRejection>,
    params: Result<Query<DuaParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(cat_name_en) = cat_name_en.map_err(|rejection| AppError::InvalidParameter {
        name: "cat_name_en",
        reason: rejection.body_text(),
    })?;
    let Query(params) = params.map_err(|rejection| AppError::InvalidParameter {
        name: "query string",
        reason: rejection.body_text(),
    })?;
    QueryResolver::resolve_duas(state.store.as_ref(), &cat_name_en, &params).await
}

/// GET /duas and /duas/ carry no category token.
pub async fn missing_category() -> AppError {
    AppError::MissingParameter("cat_name_en")
}
