// crates/core/src/summary.rs
//! The insight generator: a deterministic mapping from a profile and its
//! repository list to the multi-section narrative string.
//!
//! No I/O, no randomness, no hidden state — identical inputs always
//! produce identical output. `now` is an explicit argument.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use octolens_types::{Repo, UserProfile};

use crate::config::{SPECIALIZATION_SHARE, TOP_LANGUAGES_LONG};
use crate::error::InsightError;
use crate::metrics::{derive_metrics, language_histogram};
use crate::templates::{format_thousands, render_template, SECTIONS};
use crate::tiers;

/// Generate the narrative analysis for one profile.
///
/// Fails only on a blank handle; an empty repository list degrades every
/// metric to its zero-division-safe default.
pub fn generate_summary(
    username: &str,
    profile: &UserProfile,
    repos: &[Repo],
    now: DateTime<Utc>,
) -> Result<String, InsightError> {
    if username.trim().is_empty() {
        return Err(InsightError::InvalidInput(
            "username must not be blank".to_string(),
        ));
    }

    let histogram = language_histogram(repos);
    let top = &histogram[..histogram.len().min(TOP_LANGUAGES_LONG)];
    let m = derive_metrics(profile, repos, now);

    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("username".to_string(), username.to_string());

    vars.insert(
        "name_line".to_string(),
        match &profile.name {
            Some(name) => format!("**Name:** {name}"),
            None => format!("**Username:** {username}"),
        },
    );
    vars.insert(
        "bio_line".to_string(),
        match &profile.bio {
            Some(bio) => format!("**Bio:** \"{bio}\""),
            None => "**Bio:** No bio provided".to_string(),
        },
    );
    vars.insert("account_age".to_string(), m.account_age_years.to_string());
    vars.insert(
        "age_plural".to_string(),
        if m.account_age_years == 1 { "" } else { "s" }.to_string(),
    );
    vars.insert(
        "age_band".to_string(),
        tiers::ACCOUNT_AGE.classify(m.account_age_years).to_string(),
    );

    vars.insert(
        "tech_stack".to_string(),
        tiers::tech_stack_description(top, repos.len()),
    );
    vars.insert(
        "distribution_line".to_string(),
        if top.is_empty() {
            String::new()
        } else {
            let listing = top
                .iter()
                .map(|c| format!("{} ({} repos)", c.language, c.count))
                .collect::<Vec<_>>()
                .join(", ");
            format!("**Language Distribution:** {listing}")
        },
    );

    vars.insert("total_repos".to_string(), profile.public_repos.to_string());
    vars.insert("total_stars".to_string(), format_thousands(m.total_stars));
    vars.insert("avg_stars".to_string(), m.avg_stars.to_string());
    vars.insert("top_repo".to_string(), m.most_starred.name.clone());
    vars.insert("top_repo_stars".to_string(), m.most_starred.stars.to_string());
    vars.insert(
        "quality_tier".to_string(),
        tiers::QUALITY.classify(m.avg_stars).to_string(),
    );

    vars.insert(
        "activity_tier".to_string(),
        tiers::ACTIVITY.classify(m.recent_count).to_string(),
    );
    vars.insert("recent_count".to_string(), m.recent_count.to_string());
    vars.insert(
        "community_tier".to_string(),
        tiers::COMMUNITY.classify(m.follower_ratio).to_string(),
    );
    vars.insert(
        "followers".to_string(),
        format_thousands(u64::from(profile.followers)),
    );
    vars.insert(
        "following".to_string(),
        format_thousands(u64::from(profile.following)),
    );
    vars.insert("follower_ratio".to_string(), m.follower_ratio.to_string());

    vars.insert(
        "influence_tier".to_string(),
        tiers::INFLUENCE.classify(m.total_stars).to_string(),
    );
    vars.insert(
        "focus_phrase".to_string(),
        match top.first() {
            Some(lead) => format!("focus on {}", lead.language),
            None => "diverse technical approach".to_string(),
        },
    );
    let specialized = top
        .first()
        .is_some_and(|lead| f64::from(lead.count) > repos.len() as f64 * SPECIALIZATION_SHARE);
    vars.insert(
        "skill_phrase".to_string(),
        if specialized {
            "specialized expertise"
        } else {
            "versatile problem-solving skills"
        }
        .to_string(),
    );
    vars.insert(
        "star_level".to_string(),
        tiers::STAR_LEVEL.classify(m.total_stars).to_string(),
    );
    vars.insert(
        "impact_phrase".to_string(),
        tiers::STAR_IMPACT.classify(m.total_stars).to_string(),
    );

    let mut sections: Vec<String> = SECTIONS
        .iter()
        .map(|s| render_template(s.body, &vars))
        .collect();
    if let Some(highlight) = highlight_line(m.recent_count, profile.followers, profile.following) {
        sections.push(highlight);
    }

    tracing::debug!(
        username,
        repo_count = repos.len(),
        total_stars = m.total_stars,
        "generated profile summary"
    );

    Ok(sections.join("\n\n"))
}

/// The trailing highlight line. Present only when at least one condition
/// holds; each contributes its own clause, joined with a separator when
/// both do.
fn highlight_line(recent: u32, followers: u32, following: u32) -> Option<String> {
    let mut clauses: Vec<&str> = Vec::new();
    if recent > 10 {
        clauses.push(
            "\u{1f525} **Highly Active:** Recent commit activity shows strong ongoing engagement",
        );
    }
    if u64::from(followers) > u64::from(following) * 2 {
        clauses.push(
            "\u{1f31f} **Influencer:** Strong follower-to-following ratio suggests thought leadership",
        );
    }
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" | "))
    }
}

// ============================================================================
// Tests
// ============================================================================
