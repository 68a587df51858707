use axum::{extract::State, http::StatusCode};

use crate::database;
use crate::state::AppState;

pub async fn index() -> &'static str {
    "Connected!"
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn database_health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match database::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}
