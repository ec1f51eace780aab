// crates/server/src/routes/summary.rs
//! POST /api/summary: derive the narrative analysis from supplied data.
//!
//! The endpoint takes the already-fetched profile and repository list in
//! the request body (the frontend fetches them itself) and runs the pure
//! insight generator over them.

use std::sync::Arc;

use axum::{routing::post, Json, Router};
use chrono::Utc;
use octolens_core::{generate_summary, InsightError};
use octolens_types::{Repo, UserProfile};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body. Fields are optional so a missing one maps to the
/// endpoint's 400 contract instead of a bare serde rejection.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub username: Option<String>,
    pub profile: Option<UserProfile>,
    pub repos: Option<Vec<Repo>>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /api/summary - Generate the profile analysis narrative.
pub async fn post_summary(
    Json(request): Json<SummaryRequest>,
) -> ApiResult<Json<SummaryResponse>> {
    let (Some(username), Some(profile), Some(repos)) =
        (request.username, request.profile, request.repos)
    else {
        return Err(ApiError::BadRequest("Missing required data".to_string()));
    };

    let summary =
        generate_summary(&username, &profile, &repos, Utc::now()).map_err(|err| match err {
            InsightError::InvalidInput(msg) => ApiError::BadRequest(msg),
        })?;

    Ok(Json(SummaryResponse { summary }))
}

/// Create the summary routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/summary", post(post_summary))
}
