// crates/server/src/routes/users.rs
//! Profile and repository lookup endpoints.
//!
//! Thin pass-throughs over the fetch aggregator: the client normalizes
//! the upstream payload and serves cached snapshots when fresh.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use octolens_github::client::{COMPARE_REPO_PAGE, DEFAULT_REPO_PAGE};
use octolens_types::{Repo, UserProfile};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReposQuery {
    /// Page size; defaults to 50, clamped to 1..=100.
    pub per_page: Option<u32>,
}

/// GET /api/users/{handle} - Normalized profile lookup.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
) -> ApiResult<Json<Arc<UserProfile>>> {
    let profile = state.github.fetch_user(&handle).await?;
    Ok(Json(profile))
}

/// GET /api/users/{handle}/repos - Repository list, most recently
/// updated first, truncated to the page size. An empty list is a valid
/// response, not an error.
pub async fn get_user_repos(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
    Query(query): Query<ReposQuery>,
) -> ApiResult<Json<Arc<Vec<Repo>>>> {
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_REPO_PAGE)
        .clamp(1, COMPARE_REPO_PAGE);
    let repos = state.github.fetch_repos(&handle, per_page).await?;
    Ok(Json(repos))
}

/// Create the user routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{handle}", get(get_user))
        .route("/users/{handle}/repos", get(get_user_repos))
}
