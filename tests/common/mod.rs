//! Shared helpers for integration tests: seeded in-memory catalog, failing store, request helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use dua_catalog::{
    app_router, AppError, AppState, CatalogStore, CorsOrigins, DuaEntry, DuaQuery, ServerConfig, SqliteCatalog,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

const SCHEMA: &[&str] = &[
    "CREATE TABLE category (
        id INTEGER PRIMARY KEY,
        cat_id INTEGER NOT NULL,
        cat_name_bn TEXT,
        cat_name_en TEXT NOT NULL,
        no_of_subcat INTEGER,
        no_of_dua INTEGER
    )",
    "CREATE TABLE sub_category (
        id INTEGER PRIMARY KEY,
        cat_id INTEGER NOT NULL,
        subcat_id INTEGER NOT NULL,
        subcat_name_bn TEXT,
        subcat_name_en TEXT
    )",
    "CREATE TABLE dua (
        id INTEGER PRIMARY KEY,
        cat_id INTEGER NOT NULL,
        subcat_id INTEGER,
        dua_id INTEGER,
        dua_name_bn TEXT,
        dua_name_en TEXT,
        top_bn TEXT,
        top_en TEXT,
        dua_arabic TEXT,
        dua_indopak TEXT,
        clean_arabic TEXT,
        transliteration_bn TEXT,
        transliteration_en TEXT,
        translation_bn TEXT,
        translation_en TEXT,
        bottom_bn TEXT,
        bottom_en TEXT,
        refference_bn TEXT,
        refference_en TEXT,
        audio TEXT
    )",
];

const FIXTURES: &[&str] = &[
    "INSERT INTO category (id, cat_id, cat_name_bn, cat_name_en, no_of_subcat, no_of_dua) VALUES
        (1, 1, 'সকাল', 'Morning Dua', 1, 1),
        (2, 2, 'সন্ধ্যা', 'Evening Dua', 1, 2)",
    "INSERT INTO sub_category (id, cat_id, subcat_id, subcat_name_bn, subcat_name_en) VALUES
        (1, 1, 9, 'ঘুম থেকে উঠে', 'After waking up'),
        (2, 2, 10, 'সন্ধ্যায়', 'At dusk')",
    "INSERT INTO dua (id, cat_id, subcat_id, dua_name_bn, dua_name_en, top_en, dua_arabic, transliteration_en, translation_en, bottom_en, refference_en) VALUES
        (1, 1, 9, 'জাগরণ', 'Upon waking', 'Say:', 'الْحَمْدُ لِلَّهِ', 'Alhamdu lillah', 'All praise is for Allah', NULL, 'Bukhari 6312'),
        (2, 2, 10, NULL, 'At evening', NULL, 'أَمْسَيْنَا', 'Amsayna', 'We have reached the evening', NULL, 'Muslim 2723'),
        (3, 2, 10, NULL, 'Before sleep', NULL, 'بِاسْمِكَ', 'Bismika', 'In Your name', 'Recite thrice', 'Bukhari 6324')",
];

pub async fn seeded_catalog() -> SqliteCatalog {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    for stmt in SCHEMA.iter().chain(FIXTURES) {
        sqlx::query(stmt).execute(&pool).await.unwrap();
    }
    SqliteCatalog::new(pool)
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".to_string()]),
    }
}

pub fn build_test_app(store: impl CatalogStore + 'static) -> Router {
    app_router(AppState::new(store), &test_config()).unwrap()
}

pub async fn seeded_app() -> Router {
    build_test_app(seeded_catalog().await)
}

/// Every call fails the way a lost database connection does.
pub struct FailingStore;

fn driver_error() -> AppError {
    AppError::Store(sqlx::Error::Protocol("unable to open database file: /srv/db/dua_main.sqlite".into()))
}

#[async_trait]
impl CatalogStore for FailingStore {
    async fn categories(&self) -> Result<Vec<Value>, AppError> {
        Err(driver_error())
    }
    async fn sub_categories(&self) -> Result<Vec<Value>, AppError> {
        Err(driver_error())
    }
    async fn duas(&self, _query: &DuaQuery) -> Result<Vec<DuaEntry>, AppError> {
        Err(driver_error())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(driver_error())
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    (status, body_json(response).await)
}
