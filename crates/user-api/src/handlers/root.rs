use axum::{extract::State, Json};
use user_shared::constants::SERVICE_VERSION;

use crate::dto::{EndpointInfo, ServiceInfo};
use crate::state::AppState;

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Service information"),
    ("GET", "/users", "List users (supports skip, limit and search)"),
    ("POST", "/users", "Create a user"),
    ("GET", "/users/{id}", "Get a user by id"),
    ("PUT", "/users/{id}", "Replace a user"),
    ("DELETE", "/users/{id}", "Delete a user"),
    ("GET", "/users/search/{keyword}", "Search users by keyword"),
    ("GET", "/users/active", "List active users"),
    ("GET", "/stats", "User statistics"),
    ("POST", "/backup", "Back up the data file"),
    ("GET", "/health", "Health check"),
];

/// GET /
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "User management service".to_string(),
        version: SERVICE_VERSION.to_string(),
        total_users: state.users.count().await,
        endpoints: ENDPOINTS
            .iter()
            .map(|&(method, path, description)| EndpointInfo {
                method,
                path,
                description,
            })
            .collect(),
    })
}
