use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::fit::MAX_COMPRESSION_LEVEL;
use crate::state::AppState;

/// GET /health
/// Returns service status plus the engine capabilities a client needs up
/// front: the configured default template and the ladder depth.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "rattle-api",
        "default_template": state.config.default_template.to_string(),
        "max_compression_level": MAX_COMPRESSION_LEVEL,
    }))
}
