// crates/github/src/client.rs
//! HTTP client for the upstream hosting API.
//!
//! Profile and repository lookups are cached as immutable snapshots with
//! short TTLs (profiles change rarely, repo lists more often). Commit
//! samples are never cached and never fail — they degrade to zero.

use std::sync::Arc;
use std::time::Duration;

use octolens_types::{Repo, UserProfile};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;

use crate::cache::TtlCache;
use crate::error::GithubError;

/// Default upstream API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Profile snapshots stay fresh for five minutes.
pub const PROFILE_CACHE_TTL: Duration = Duration::from_secs(300);

/// Repository lists change more frequently; two minutes.
pub const REPOS_CACHE_TTL: Duration = Duration::from_secs(120);

/// Default page size for profile-page repository lists.
pub const DEFAULT_REPO_PAGE: u32 = 50;

/// Largest accepted page size, also used by the summary/comparison flows.
pub const COMPARE_REPO_PAGE: u32 = 100;

/// How many of the most recently updated repos get a commit sample.
pub const COMMIT_SAMPLE_REPOS: usize = 5;

/// Per-repository commit page size for the best-effort sample.
pub const COMMIT_SAMPLE_PAGE: u32 = 30;

/// Configuration for [`GithubClient`].
pub struct GithubConfig {
    /// Upstream base URL. Tests point this at a local mock server.
    pub base_url: String,
    /// Optional bearer token (`GITHUB_TOKEN`). Unauthenticated requests
    /// work but hit stricter upstream rate limits.
    pub token: Option<String>,
    pub profile_ttl: Duration,
    pub repos_ttl: Duration,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: std::env::var("GITHUB_TOKEN").ok(),
            profile_ttl: PROFILE_CACHE_TTL,
            repos_ttl: REPOS_CACHE_TTL,
        }
    }
}

/// Client for profile, repository, and commit lookups.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    profiles: TtlCache<String, UserProfile>,
    repo_lists: TtlCache<(String, u32), Vec<Repo>>,
}

impl GithubClient {
    /// Build a client with the required upstream headers preconfigured.
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("octolens"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                GithubError::Config {
                    message: format!("invalid token value: {e}"),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GithubError::Config {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
            profiles: TtlCache::new(config.profile_ttl),
            repo_lists: TtlCache::new(config.repos_ttl),
        })
    }

    /// Fetch a profile by handle, serving from the cache when fresh.
    pub async fn fetch_user(&self, handle: &str) -> Result<Arc<UserProfile>, GithubError> {
        let key = handle.to_ascii_lowercase();
        if let Some(cached) = self.profiles.get(&key) {
            tracing::debug!(handle, "profile served from cache");
            return Ok(cached);
        }

        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(handle));
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| GithubError::Network { source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound {
                handle: handle.to_string(),
            });
        }
        if !status.is_success() {
            return Err(GithubError::Upstream { status });
        }

        let profile: UserProfile = response
            .json()
            .await
            .map_err(|source| GithubError::Decode { source })?;

        tracing::debug!(handle, "profile fetched from upstream");
        Ok(self.profiles.insert(key, profile))
    }

    /// Fetch a handle's repositories, most recently updated first,
    /// truncated to `per_page`. Zero public repositories is an empty
    /// list, not an error.
    pub async fn fetch_repos(
        &self,
        handle: &str,
        per_page: u32,
    ) -> Result<Arc<Vec<Repo>>, GithubError> {
        let key = (handle.to_ascii_lowercase(), per_page);
        if let Some(cached) = self.repo_lists.get(&key) {
            tracing::debug!(handle, per_page, "repo list served from cache");
            return Ok(cached);
        }

        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.base_url,
            urlencoding::encode(handle),
            per_page
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| GithubError::Network { source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound {
                handle: handle.to_string(),
            });
        }
        if !status.is_success() {
            return Err(GithubError::Upstream { status });
        }

        let repos: Vec<Repo> = response
            .json()
            .await
            .map_err(|source| GithubError::Decode { source })?;

        tracing::debug!(handle, count = repos.len(), "repo list fetched from upstream");
        Ok(self.repo_lists.insert(key, repos))
    }

    /// Best-effort commit count for one repository.
    ///
    /// Any failure (missing or empty repo, rate limit, transport fault)
    /// degrades to zero rather than propagating — commit counts are an
    /// approximation feature, not correctness-critical. Never cached.
    pub async fn commit_sample(&self, owner: &str, repo: &str, per_page: u32) -> u32 {
        match self.try_commit_sample(owner, repo, per_page).await {
            Ok(count) => count,
            Err(err) => {
                tracing::debug!(owner, repo, error = %err, "commit sample unavailable, counting 0");
                0
            }
        }
    }

    async fn try_commit_sample(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<u32, GithubError> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page={}",
            self.base_url,
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            per_page
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| GithubError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Upstream { status });
        }

        // Only the array length matters.
        let commits: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|source| GithubError::Decode { source })?;
        Ok(commits.len() as u32)
    }
}

// ============================================================================
// Tests
// ============================================================================
