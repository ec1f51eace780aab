// crates/types/src/lib.rs
//! Shared data types for octolens.
//!
//! Upstream records (`UserProfile`, `Repo`) keep the GitHub REST API's
//! snake_case field names so they deserialize straight off the wire; the
//! comparison shape uses camelCase to match the frontend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A developer profile from the `/users/{handle}` API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// A single repository from the `/users/{handle}/repos` API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub html_url: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Side-by-side metrics for one user in a comparison.
///
/// `repo_count` comes from the profile's `public_repos`; `approx_commits`
/// is a best-effort sum over the most recently updated repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareMetrics {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub repo_count: u32,
    pub total_stars: u64,
    pub followers: u32,
    pub approx_commits: u32,
}
