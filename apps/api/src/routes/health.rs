use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the embedding backend in use.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let embedder = state.screener.embedder();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "screener-api",
        "embedder": embedder.name(),
        "embedding_dim": embedder.dimension()
    }))
}
