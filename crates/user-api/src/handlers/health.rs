use axum::{extract::State, http::StatusCode, Json};
use chrono::Local;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Local::now(),
            users_count: state.users.count().await,
            data_file_exists: state.users.data_file_exists().await,
            store_recovered: state.users.recovered_from_corrupt(),
        }),
    )
}
