//! User CRUD, search and listing handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;
use user_core::domain::{User, UserInput, UserPage};

use crate::dto::{ListUsersQuery, UserEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /users?skip=&limit=&search=
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Json<UserPage> {
    Json(
        state
            .users
            .list(query.skip, query.limit, query.search.as_deref())
            .await,
    )
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserInput>,
) -> Result<Json<UserEnvelope>, ApiError> {
    info!("Create user request: {}", payload.username);
    let user = state.users.create(payload).await?;
    Ok(Json(UserEnvelope::new("User created", user)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(id).await?))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserInput>,
) -> Result<Json<UserEnvelope>, ApiError> {
    info!("Update user request: {}", id);
    let user = state.users.update(id, payload).await?;
    Ok(Json(UserEnvelope::new("User updated", user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserEnvelope>, ApiError> {
    info!("Delete user request: {}", id);
    let user = state.users.delete(id).await?;
    Ok(Json(UserEnvelope::new("User deleted", user)))
}

/// GET /users/search/{keyword}
pub async fn search_users(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Json<Vec<User>> {
    Json(state.users.search(&keyword).await)
}

/// GET /users/active
pub async fn list_active_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list_active().await)
}
