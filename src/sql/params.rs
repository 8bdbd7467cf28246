//! Values that sqlx can bind to a SQLite statement.

use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::{Database, Type};

/// A bound parameter. Only ever produced by the builder, never spliced into SQL text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqliteBindValue {
    Int(i64),
    Text(String),
}

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqliteBindValue::Int(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
        }
    }
}

impl Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}
