//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::http::server::AppState;

/// `GET /api/health` — always 200, independent of mail verification
/// state.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "uptime": state.started_at.elapsed().as_secs(),
    }))
}
