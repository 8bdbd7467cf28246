//! Service routes: plain-text liveness at `/`, plus health, readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const LIVENESS_TEXT: &str = "Dua Ruqyah server is running";

/// Body of `/health` and `/ready`. `database` is only reported by readiness.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
}

const SERVICE_INFO: ServiceInfo = ServiceInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        database: None,
    })
}

/// 503 while the catalog store cannot answer `SELECT 1`.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusBody {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusBody {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn service_info() -> Json<ServiceInfo> {
    Json(SERVICE_INFO)
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(service_info))
        .with_state(state)
}
