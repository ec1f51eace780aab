// crates/server/src/routes/compare.rs
//! GET /api/compare: side-by-side metrics for two handles.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use octolens_github::{compare_users, Comparison};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub left: Option<String>,
    pub right: Option<String>,
}

/// GET /api/compare?left=a&right=b - Compare two users.
///
/// Validation failures (blank or duplicate handles) answer 400 before
/// any upstream request is issued.
pub async fn get_compare(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompareQuery>,
) -> ApiResult<Json<Comparison>> {
    let left = query.left.unwrap_or_default();
    let right = query.right.unwrap_or_default();
    let comparison = compare_users(&state.github, &left, &right).await?;
    Ok(Json(comparison))
}

/// Create the compare routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/compare", get(get_compare))
}
