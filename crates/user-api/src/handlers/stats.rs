use axum::{extract::State, Json};
use user_core::domain::UserStats;

use crate::state::AppState;

/// GET /stats
pub async fn get_stats(State(state): State<AppState>) -> Json<UserStats> {
    Json(state.users.stats().await)
}
