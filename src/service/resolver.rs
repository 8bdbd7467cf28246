//! Query resolution: path token and query filters -> store lookup -> outcome.

use crate::case::token_to_display_name;
use crate::error::AppError;
use crate::model::{DuaEntry, DuaFilter, DuaQuery};
use crate::response::OneOrMany;
use crate::store::CatalogStore;
use serde::Deserialize;
use serde_json::Value;

/// Recognized query parameters of `/duas/:cat_name_en`. Unknown names are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DuaParams {
    pub cat: Option<String>,
    pub subcat: Option<String>,
    pub dua: Option<String>,
}

impl DuaParams {
    /// Filters in fixed order: `cat`, `subcat`, `dua`.
    pub fn filters(&self) -> Result<Vec<DuaFilter>, AppError> {
        let mut filters = Vec::with_capacity(3);
        if let Some(v) = parse_id("cat", self.cat.as_deref())? {
            filters.push(DuaFilter::Category(v));
        }
        if let Some(v) = parse_id("subcat", self.subcat.as_deref())? {
            filters.push(DuaFilter::SubCategory(v));
        }
        if let Some(v) = parse_id("dua", self.dua.as_deref())? {
            filters.push(DuaFilter::Dua(v));
        }
        Ok(filters)
    }
}

fn parse_id(name: &'static str, raw: Option<&str>) -> Result<Option<i64>, AppError> {
    let Some(raw) = raw else { return Ok(None) };
    if raw.is_empty() {
        return Err(AppError::MissingParameter(name));
    }
    raw.parse::<i64>().map(Some).map_err(|_| AppError::InvalidParameter {
        name,
        reason: format!("expected an integer, got '{}'", raw),
    })
}

/// Validate the request and build the typed lookup.
pub fn build_query(token: &str, params: &DuaParams) -> Result<DuaQuery, AppError> {
    if token.trim().is_empty() {
        return Err(AppError::MissingParameter("cat_name_en"));
    }
    Ok(DuaQuery {
        category_name: token_to_display_name(token),
        filters: params.filters()?,
    })
}

pub struct QueryResolver;

impl QueryResolver {
    pub async fn list_categories(store: &dyn CatalogStore) -> Result<Vec<Value>, AppError> {
        store.categories().await
    }

    pub async fn list_sub_categories(store: &dyn CatalogStore) -> Result<Vec<Value>, AppError> {
        store.sub_categories().await
    }

    /// Zero rows is NotFound; a fully specified lookup yields one object, anything else the row set.
    pub async fn resolve_duas(
        store: &dyn CatalogStore,
        token: &str,
        params: &DuaParams,
    ) -> Result<OneOrMany<DuaEntry>, AppError> {
        let query = build_query(token, params)?;
        let mut rows = store.duas(&query).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound("Dua"));
        }
        tracing::debug!(category = %query.category_name, rows = rows.len(), "resolved duas");
        if query.is_fully_specified() {
            return Ok(OneOrMany::One(rows.swap_remove(0)));
        }
        Ok(OneOrMany::Many(rows))
    }
}
