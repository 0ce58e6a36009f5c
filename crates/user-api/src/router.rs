use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{backup, health, root, stats, users};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::service_info))
        .route("/health", get(health::health_check))
        .route("/users", get(users::list_users).post(users::create_user))
        // Static segments win over `{id}`.
        .route("/users/active", get(users::list_active_users))
        .route("/users/search/{keyword}", get(users::search_users))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/stats", get(stats::get_stats))
        .route("/backup", post(backup::create_backup))
        .with_state(state)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
