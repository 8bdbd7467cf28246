//! Catalog types: the entry projection and the typed lookup built from a request.

use serde::Serialize;

/// Entry columns returned by a lookup, in output order.
pub const DUA_COLUMNS: &[&str] = &[
    "id",
    "cat_id",
    "subcat_id",
    "dua_name_bn",
    "dua_name_en",
    "top_en",
    "dua_arabic",
    "transliteration_en",
    "translation_en",
    "bottom_en",
    "refference_en",
];

/// One row of the entry lookup.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct DuaEntry {
    pub id: i64,
    pub cat_id: i64,
    pub subcat_id: Option<i64>,
    pub dua_name_bn: Option<String>,
    pub dua_name_en: Option<String>,
    pub top_en: Option<String>,
    pub dua_arabic: Option<String>,
    pub transliteration_en: Option<String>,
    pub translation_en: Option<String>,
    pub bottom_en: Option<String>,
    pub refference_en: Option<String>,
}

/// A recognized entry filter. Each variant is bound to exactly one `dua` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuaFilter {
    /// `?cat=` -> `dua.cat_id`
    Category(i64),
    /// `?subcat=` -> `dua.subcat_id`
    SubCategory(i64),
    /// `?dua=` -> `dua.id`
    Dua(i64),
}

impl DuaFilter {
    pub fn column(&self) -> &'static str {
        match self {
            DuaFilter::Category(_) => "cat_id",
            DuaFilter::SubCategory(_) => "subcat_id",
            DuaFilter::Dua(_) => "id",
        }
    }

    pub fn value(&self) -> i64 {
        match *self {
            DuaFilter::Category(v) | DuaFilter::SubCategory(v) | DuaFilter::Dua(v) => v,
        }
    }
}

/// Validated entry lookup: the category display name plus filters in `cat`, `subcat`, `dua` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuaQuery {
    pub category_name: String,
    pub filters: Vec<DuaFilter>,
}

impl DuaQuery {
    pub fn has_sub_category(&self) -> bool {
        self.filters.iter().any(|f| matches!(f, DuaFilter::SubCategory(_)))
    }

    /// All three filters present: the lookup names a single entry.
    pub fn is_fully_specified(&self) -> bool {
        let has = |pred: fn(&DuaFilter) -> bool| self.filters.iter().any(pred);
        has(|f| matches!(f, DuaFilter::Category(_)))
            && has(|f| matches!(f, DuaFilter::SubCategory(_)))
            && has(|f| matches!(f, DuaFilter::Dua(_)))
    }
}
