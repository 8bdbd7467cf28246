//! Catalog store: the read-only SQLite handle shared by every request.

use crate::error::AppError;
use crate::model::{DuaEntry, DuaQuery};
use crate::sql::{select_all, select_duas, CatalogTable};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::str::FromStr;

/// Read access to the catalog. Handlers only see this trait, so tests can swap in another store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All `category` rows, store order.
    async fn categories(&self) -> Result<Vec<Value>, AppError>;
    /// All `sub_category` rows, store order.
    async fn sub_categories(&self) -> Result<Vec<Value>, AppError>;
    /// Entries matching the lookup.
    async fn duas(&self, query: &DuaQuery) -> Result<Vec<DuaEntry>, AppError>;
    /// Cheap round-trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteCatalog { pool }
    }

    /// Open the database file read-only. A missing file is an error, never created.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .read_only(true)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn list_table(&self, table: CatalogTable) -> Result<Vec<Value>, AppError> {
        let sql = select_all(table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn categories(&self) -> Result<Vec<Value>, AppError> {
        self.list_table(CatalogTable::Category).await
    }

    async fn sub_categories(&self) -> Result<Vec<Value>, AppError> {
        self.list_table(CatalogTable::SubCategory).await
    }

    async fn duas(&self, query: &DuaQuery) -> Result<Vec<DuaEntry>, AppError> {
        let q = select_duas(query);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut stmt = sqlx::query_as::<_, DuaEntry>(&q.sql);
        for p in &q.params {
            stmt = stmt.bind(p.clone());
        }
        Ok(stmt.fetch_all(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn row_to_json(row: &SqliteRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

/// SQLite storage classes: INTEGER, REAL, TEXT, BLOB, NULL.
fn cell_to_value(row: &SqliteRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        return serde_json::Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null);
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(bytes)) = row.try_get::<Option<Vec<u8>>, _>(name) {
        return Value::Array(bytes.into_iter().map(|b| Value::Number(b.into())).collect());
    }
    Value::Null
}
