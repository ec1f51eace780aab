//! API route handlers for the octolens server.

pub mod compare;
pub mod health;
pub mod notes;
pub mod summary;
pub mod users;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET /api/health - Health check
/// - GET /api/users/{handle} - Normalized profile lookup
/// - GET /api/users/{handle}/repos - Repository list, most recently updated first
/// - POST /api/summary - Generate the profile analysis narrative
/// - GET /api/compare - Side-by-side metrics for two handles
/// - GET /api/notes/{key} - Read a saved note
/// - PUT /api/notes/{key} - Save a note
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", users::router())
        .nest("/api", summary::router())
        .nest("/api", compare::router())
        .nest("/api", notes::router())
        .with_state(state)
}
