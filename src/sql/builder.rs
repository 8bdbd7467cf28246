//! Builds the parameterized entry lookup from a validated `DuaQuery`.

use crate::model::{DuaQuery, DUA_COLUMNS};
use crate::sql::SqliteBindValue;

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqliteBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqliteBindValue) {
        self.params.push(v);
    }
}

/// Projection of the entry columns, qualified by the `dua` table.
fn dua_column_list() -> String {
    DUA_COLUMNS
        .iter()
        .map(|c| format!("dua.{} AS {}", c, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT entries of the named category, narrowed by each filter in order.
/// The category name is always the first parameter; filter values follow. `sub_category` is joined
/// only when filtering by sub-category, and a fully specified lookup is capped at one row.
pub fn select_duas(query: &DuaQuery) -> QueryBuf {
    let mut q = QueryBuf::new();

    let mut where_parts = vec!["category.cat_name_en = ?".to_string()];
    q.push_param(SqliteBindValue::Text(query.category_name.clone()));
    for filter in &query.filters {
        where_parts.push(format!("dua.{} = ?", filter.column()));
        q.push_param(SqliteBindValue::Int(filter.value()));
    }

    let sub_join = if query.has_sub_category() {
        " JOIN sub_category ON dua.subcat_id = sub_category.subcat_id"
    } else {
        ""
    };
    let limit_clause = if query.is_fully_specified() { " LIMIT 1" } else { "" };

    q.sql = format!(
        "SELECT {} FROM dua JOIN category ON dua.cat_id = category.cat_id{} WHERE {}{}",
        dua_column_list(),
        sub_join,
        where_parts.join(" AND "),
        limit_clause
    );
    q
}

/// SELECT every row of a catalog table in store order.
pub fn select_all(table: CatalogTable) -> String {
    format!("SELECT * FROM {}", table.name())
}

/// Tables that can be listed whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    Category,
    SubCategory,
}

impl CatalogTable {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogTable::Category => "category",
            CatalogTable::SubCategory => "sub_category",
        }
    }
}
