// crates/github/src/compare.rs
//! Side-by-side comparison metrics for two handles.
//!
//! Purely additive/structural — no classification logic. The two profiles
//! fetch concurrently; commit samples run as a bounded sequential loop
//! per handle with every failure swallowed to zero.

use octolens_types::CompareMetrics;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::{GithubClient, COMMIT_SAMPLE_PAGE, COMMIT_SAMPLE_REPOS, COMPARE_REPO_PAGE};
use crate::error::GithubError;

/// Input-validation failures. Surfaced inline to the user; no upstream
/// request is ever issued for them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("two usernames are required")]
    MissingHandle,
    #[error("usernames must be different")]
    SameHandle,
}

/// Failures of the overall comparison.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Github(#[from] GithubError),
}

/// Both sides of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub left: CompareMetrics,
    pub right: CompareMetrics,
}

/// Reject blank or duplicate handles. Handles are compared
/// case-insensitively — the upstream service treats them that way.
pub fn validate_pair(left: &str, right: &str) -> Result<(), ValidationError> {
    let left = left.trim();
    let right = right.trim();
    if left.is_empty() || right.is_empty() {
        return Err(ValidationError::MissingHandle);
    }
    if left.eq_ignore_ascii_case(right) {
        return Err(ValidationError::SameHandle);
    }
    Ok(())
}

/// Fetch metrics for both handles concurrently and join the results.
/// No ordering guarantee between the two sides resolving; the output
/// waits for both.
pub async fn compare_users(
    client: &GithubClient,
    left: &str,
    right: &str,
) -> Result<Comparison, CompareError> {
    validate_pair(left, right)?;
    let (left, right) = tokio::try_join!(
        user_metrics(client, left.trim()),
        user_metrics(client, right.trim()),
    )?;
    Ok(Comparison { left, right })
}

/// Metrics for one side: profile, repo list, and a best-effort commit
/// sample over the most recently updated repositories.
async fn user_metrics(client: &GithubClient, handle: &str) -> Result<CompareMetrics, GithubError> {
    let profile = client.fetch_user(handle).await?;
    let repos = client.fetch_repos(handle, COMPARE_REPO_PAGE).await?;

    let total_stars = repos.iter().map(|r| u64::from(r.stargazers_count)).sum();

    let mut approx_commits = 0u32;
    for repo in repos.iter().take(COMMIT_SAMPLE_REPOS) {
        approx_commits += client
            .commit_sample(&profile.login, &repo.name, COMMIT_SAMPLE_PAGE)
            .await;
    }

    Ok(CompareMetrics {
        username: profile.login.clone(),
        name: profile.name.clone(),
        avatar_url: profile.avatar_url.clone(),
        repo_count: profile.public_repos,
        total_stars,
        followers: profile.followers,
        approx_commits,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GithubConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_blank_handles() {
        assert_eq!(validate_pair("", "octocat"), Err(ValidationError::MissingHandle));
        assert_eq!(validate_pair("octocat", "   "), Err(ValidationError::MissingHandle));
        assert_eq!(validate_pair("", ""), Err(ValidationError::MissingHandle));
    }

    #[test]
    fn test_validate_duplicate_handles_case_insensitive() {
        assert_eq!(validate_pair("octocat", "octocat"), Err(ValidationError::SameHandle));
        assert_eq!(validate_pair("OctoCat", "octocat"), Err(ValidationError::SameHandle));
        assert_eq!(validate_pair(" octocat ", "octocat"), Err(ValidationError::SameHandle));
    }

    #[test]
    fn test_validate_distinct_handles() {
        assert_eq!(validate_pair("octocat", "torvalds"), Ok(()));
    }

    fn user_json(login: &str, public_repos: u32, followers: u32) -> String {
        format!(
            r#"{{
                "login": "{login}",
                "name": null,
                "bio": null,
                "avatar_url": "https://example.invalid/{login}.png",
                "html_url": "https://github.com/{login}",
                "public_repos": {public_repos},
                "followers": {followers},
                "following": 2,
                "created_at": "2015-04-01T00:00:00Z"
            }}"#
        )
    }

    fn repo_json(name: &str, stars: u32) -> String {
        format!(
            r#"{{
                "name": "{name}",
                "description": null,
                "language": "Rust",
                "stargazers_count": {stars},
                "html_url": "https://github.com/x/{name}",
                "fork": false,
                "archived": false,
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2024-06-15T00:00:00Z"
            }}"#
        )
    }

    #[tokio::test]
    async fn test_duplicate_handles_issue_no_network_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GithubClient::new(GithubConfig {
            base_url: server.url(),
            token: None,
            profile_ttl: std::time::Duration::from_secs(60),
            repos_ttl: std::time::Duration::from_secs(60),
        })
        .expect("client builds");

        let err = compare_users(&client, "octocat", "OCTOCAT").await.unwrap_err();
        assert!(matches!(
            err,
            CompareError::Validation(ValidationError::SameHandle)
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_compare_two_users_sums_stars_and_commits() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/users/alpha")
            .with_status(200)
            .with_body(user_json("alpha", 2, 40))
            .create_async()
            .await;
        server
            .mock("GET", "/users/beta")
            .with_status(200)
            .with_body(user_json("beta", 1, 7))
            .create_async()
            .await;

        server
            .mock("GET", "/users/alpha/repos?per_page=100&sort=updated")
            .with_status(200)
            .with_body(format!("[{},{}]", repo_json("one", 10), repo_json("two", 5)))
            .create_async()
            .await;
        server
            .mock("GET", "/users/beta/repos?per_page=100&sort=updated")
            .with_status(200)
            .with_body(format!("[{}]", repo_json("solo", 3)))
            .create_async()
            .await;

        // alpha: one repo answers with 2 commits, the other is inaccessible
        // (best-effort: counts 0 without failing the comparison).
        server
            .mock("GET", "/repos/alpha/one/commits?per_page=30")
            .with_status(200)
            .with_body(r#"[{"sha": "a"}, {"sha": "b"}]"#)
            .create_async()
            .await;
        server
            .mock("GET", "/repos/alpha/two/commits?per_page=30")
            .with_status(404)
            .create_async()
            .await;
        server
            .mock("GET", "/repos/beta/solo/commits?per_page=30")
            .with_status(200)
            .with_body(r#"[{"sha": "c"}]"#)
            .create_async()
            .await;

        let client = GithubClient::new(GithubConfig {
            base_url: server.url(),
            token: None,
            profile_ttl: std::time::Duration::from_secs(60),
            repos_ttl: std::time::Duration::from_secs(60),
        })
        .expect("client builds");

        let comparison = compare_users(&client, "alpha", "beta").await.unwrap();

        assert_eq!(comparison.left.username, "alpha");
        assert_eq!(comparison.left.repo_count, 2);
        assert_eq!(comparison.left.total_stars, 15);
        assert_eq!(comparison.left.followers, 40);
        assert_eq!(comparison.left.approx_commits, 2);

        assert_eq!(comparison.right.username, "beta");
        assert_eq!(comparison.right.repo_count, 1);
        assert_eq!(comparison.right.total_stars, 3);
        assert_eq!(comparison.right.approx_commits, 1);
    }

    #[tokio::test]
    async fn test_compare_fails_when_one_user_missing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users/alpha")
            .with_status(200)
            .with_body(user_json("alpha", 0, 0))
            .create_async()
            .await;
        server
            .mock("GET", "/users/alpha/repos?per_page=100&sort=updated")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        server
            .mock("GET", "/users/ghost")
            .with_status(404)
            .create_async()
            .await;

        let client = GithubClient::new(GithubConfig {
            base_url: server.url(),
            token: None,
            profile_ttl: std::time::Duration::from_secs(60),
            repos_ttl: std::time::Duration::from_secs(60),
        })
        .expect("client builds");

        let err = compare_users(&client, "alpha", "ghost").await.unwrap_err();
        assert!(matches!(
            err,
            CompareError::Github(GithubError::NotFound { ref handle }) if handle == "ghost"
        ));
    }
}
