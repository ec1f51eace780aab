// crates/core/src/metrics.rs
//! Pure aggregate metrics over a fetched profile and repository list.
//!
//! The input list order (most recently updated first, as the upstream API
//! returns it) matters only for tie-breaking; `now` is an explicit
//! argument so every computation is deterministic.

use chrono::{DateTime, Duration, Utc};
use octolens_types::{Repo, UserProfile};

use crate::config::{DAYS_PER_YEAR, RECENT_WINDOW_DAYS};

/// One language and the number of repositories it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCount {
    pub language: String,
    pub count: u32,
}

/// Count repositories per primary language, ranked by count descending.
///
/// Ties keep the language whose first contributing repository appears
/// earliest in the input list. Repositories with no language are skipped.
pub fn language_histogram(repos: &[Repo]) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();
    for repo in repos {
        let Some(language) = repo.language.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|c| c.language == language) {
            Some(entry) => entry.count += 1,
            None => counts.push(LanguageCount {
                language: language.to_string(),
                count: 1,
            }),
        }
    }
    // Stable sort: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The repository with the highest star count.
///
/// Defaults to an empty name and zero stars for an empty list; the
/// narrative renders the fallback rather than omitting the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MostStarred {
    pub name: String,
    pub stars: u32,
}

/// Read-only metric snapshot derived from one profile and its repos.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub total_stars: u64,
    /// `total_stars / max(repo_count, 1)` — defined even for an empty set.
    pub avg_stars: f64,
    pub most_starred: MostStarred,
    /// Repositories updated within the recent window.
    pub recent_count: u32,
    /// Whole years since account creation, floor of elapsed / 365 days.
    pub account_age_years: i64,
    /// `followers / max(following, 1)` — never divides by zero.
    pub follower_ratio: f64,
}

/// Compute the full metric snapshot for a profile and repository list.
pub fn derive_metrics(profile: &UserProfile, repos: &[Repo], now: DateTime<Utc>) -> DerivedMetrics {
    let total_stars: u64 = repos.iter().map(|r| u64::from(r.stargazers_count)).sum();
    let avg_stars = total_stars as f64 / repos.len().max(1) as f64;

    // Seeded from the first entry so ties break to the earliest occurrence,
    // and a list of all-zero-star repos still names its first repo.
    let most_starred = match repos.first() {
        Some(first) => {
            let mut best = MostStarred {
                name: first.name.clone(),
                stars: first.stargazers_count,
            };
            for repo in &repos[1..] {
                if repo.stargazers_count > best.stars {
                    best = MostStarred {
                        name: repo.name.clone(),
                        stars: repo.stargazers_count,
                    };
                }
            }
            best
        }
        None => MostStarred::default(),
    };

    let recent_window = Duration::days(RECENT_WINDOW_DAYS);
    let recent_count = repos
        .iter()
        .filter(|r| now.signed_duration_since(r.updated_at) <= recent_window)
        .count() as u32;

    let account_age_years =
        now.signed_duration_since(profile.created_at).num_days() / DAYS_PER_YEAR;

    let follower_ratio = f64::from(profile.followers) / f64::from(profile.following.max(1));

    DerivedMetrics {
        total_stars,
        avg_stars,
        most_starred,
        recent_count,
        account_age_years,
        follower_ratio,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    fn repo(name: &str, language: Option<&str>, stars: u32, updated_at: &str) -> Repo {
        Repo {
            name: name.to_string(),
            description: None,
            language: language.map(str::to_string),
            stargazers_count: stars,
            html_url: format!("https://github.com/someone/{name}"),
            fork: false,
            archived: false,
            created_at: ts("2020-01-01T00:00:00Z"),
            updated_at: ts(updated_at),
        }
    }

    fn profile(followers: u32, following: u32, created_at: &str) -> UserProfile {
        UserProfile {
            login: "someone".to_string(),
            name: None,
            bio: None,
            location: None,
            avatar_url: "https://example.invalid/a.png".to_string(),
            html_url: "https://github.com/someone".to_string(),
            public_repos: 3,
            followers,
            following,
            created_at: ts(created_at),
        }
    }

    const NOW: &str = "2026-08-01T00:00:00Z";

    #[test]
    fn test_histogram_counts_and_ranks() {
        let repos = vec![
            repo("a", Some("Go"), 0, "2026-07-30T00:00:00Z"),
            repo("b", Some("Rust"), 0, "2026-07-29T00:00:00Z"),
            repo("c", Some("Go"), 0, "2026-07-28T00:00:00Z"),
            repo("d", None, 0, "2026-07-27T00:00:00Z"),
        ];
        let hist = language_histogram(&repos);
        assert_eq!(hist.len(), 2);
        assert_eq!(hist[0].language, "Go");
        assert_eq!(hist[0].count, 2);
        assert_eq!(hist[1].language, "Rust");
        assert_eq!(hist[1].count, 1);
    }

    #[test]
    fn test_histogram_tie_breaks_to_first_seen() {
        // Rust and Go both appear once; Rust's repo comes first in the
        // recency-sorted input, so Rust ranks first.
        let repos = vec![
            repo("newer", Some("Rust"), 0, "2026-07-30T00:00:00Z"),
            repo("older", Some("Go"), 0, "2026-07-01T00:00:00Z"),
        ];
        let hist = language_histogram(&repos);
        assert_eq!(hist[0].language, "Rust");
        assert_eq!(hist[1].language, "Go");
    }

    #[test]
    fn test_most_starred_tie_breaks_to_first_occurrence() {
        let repos = vec![
            repo("first", Some("Go"), 40, "2026-07-30T00:00:00Z"),
            repo("second", Some("Go"), 40, "2026-07-29T00:00:00Z"),
        ];
        let m = derive_metrics(&profile(0, 0, "2020-01-01T00:00:00Z"), &repos, ts(NOW));
        assert_eq!(m.most_starred.name, "first");
        assert_eq!(m.most_starred.stars, 40);
    }

    #[test]
    fn test_most_starred_all_zero_names_first_repo() {
        let repos = vec![
            repo("alpha", None, 0, "2026-07-30T00:00:00Z"),
            repo("beta", None, 0, "2026-07-29T00:00:00Z"),
        ];
        let m = derive_metrics(&profile(0, 0, "2020-01-01T00:00:00Z"), &repos, ts(NOW));
        assert_eq!(m.most_starred.name, "alpha");
        assert_eq!(m.most_starred.stars, 0);
    }

    #[test]
    fn test_empty_repo_list_degrades_safely() {
        let m = derive_metrics(&profile(10, 5, "2020-01-01T00:00:00Z"), &[], ts(NOW));
        assert_eq!(m.total_stars, 0);
        assert_eq!(m.avg_stars, 0.0);
        assert_eq!(m.most_starred, MostStarred::default());
        assert_eq!(m.recent_count, 0);
    }

    #[test]
    fn test_recent_window_boundary() {
        let repos = vec![
            // 89 days before NOW: recent.
            repo("in", None, 0, "2026-05-04T00:00:00Z"),
            // 91 days before NOW: not recent.
            repo("out", None, 0, "2026-05-02T00:00:00Z"),
        ];
        let m = derive_metrics(&profile(0, 0, "2020-01-01T00:00:00Z"), &repos, ts(NOW));
        assert_eq!(m.recent_count, 1);
    }

    #[test]
    fn test_follower_ratio_with_zero_following() {
        let m = derive_metrics(&profile(50, 0, "2020-01-01T00:00:00Z"), &[], ts(NOW));
        assert_eq!(m.follower_ratio, 50.0);
        assert!(m.follower_ratio.is_finite());
    }

    #[test]
    fn test_account_age_floors_to_whole_years() {
        // Just under three flat years (3 * 365 = 1095 days) elapsed.
        let m = derive_metrics(&profile(0, 0, "2023-08-05T00:00:00Z"), &[], ts(NOW));
        assert_eq!(m.account_age_years, 2);

        let m = derive_metrics(&profile(0, 0, "2023-07-01T00:00:00Z"), &[], ts(NOW));
        assert_eq!(m.account_age_years, 3);
    }

    #[test]
    fn test_spec_scenario_metrics() {
        let repos = vec![
            repo("go-one", Some("Go"), 5, "2026-07-25T00:00:00Z"),
            repo("go-two", Some("Go"), 3, "2026-07-24T00:00:00Z"),
            repo("rust-one", Some("Rust"), 40, "2026-07-23T00:00:00Z"),
        ];
        let m = derive_metrics(&profile(50, 10, "2023-07-01T00:00:00Z"), &repos, ts(NOW));
        assert_eq!(m.total_stars, 48);
        assert_eq!(m.avg_stars, 16.0);
        assert_eq!(m.most_starred.name, "rust-one");
        assert_eq!(m.most_starred.stars, 40);
        assert_eq!(m.recent_count, 3);
        assert_eq!(m.account_age_years, 3);
        assert_eq!(m.follower_ratio, 5.0);
    }
}
