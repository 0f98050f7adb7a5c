//! Health check handler.

use axum::Json;
use axum::extract::State;

use villacare_database::connection;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let database = match connection::health_check(&state.db_pool).await {
        Ok(true) => "up",
        _ => "down",
    };

    Ok(Json(HealthResponse {
        status: if database == "up" { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
