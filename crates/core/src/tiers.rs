// crates/core/src/tiers.rs
//! Qualitative tier classification.
//!
//! Each ladder is an explicit ordered list of `(threshold, label)` pairs
//! evaluated top-down with a strict `>` comparison: a value exactly at a
//! boundary takes the lower label. Keeping the ladders as data makes the
//! boundary behavior auditable in isolation from the narrative text.

use crate::config::{PRIMARY_FOCUS_SHARE, TOP_LANGUAGES_SHORT};
use crate::metrics::LanguageCount;

/// An ordered threshold ladder. The first step whose threshold the value
/// strictly exceeds supplies the label; otherwise the fallback applies.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: 'static> {
    pub steps: &'static [(T, &'static str)],
    pub fallback: &'static str,
}

impl<T: PartialOrd + Copy> Ladder<T> {
    pub fn classify(&self, value: T) -> &'static str {
        self.steps
            .iter()
            .find(|(threshold, _)| value > *threshold)
            .map(|(_, label)| *label)
            .unwrap_or(self.fallback)
    }
}

/// Influence tier, by total star count.
pub const INFLUENCE: Ladder<u64> = Ladder {
    steps: &[
        (10_000, "highly influential"),
        (1_000, "well-established"),
        (100, "emerging"),
    ],
    fallback: "developing",
};

/// Activity tier, by count of repositories updated in the recent window.
pub const ACTIVITY: Ladder<u32> = Ladder {
    steps: &[
        (20, "extremely active"),
        (10, "very active"),
        (5, "moderately active"),
        (0, "occasionally active"),
    ],
    fallback: "inactive",
};

/// Community tier, by follower/following ratio.
pub const COMMUNITY: Ladder<f64> = Ladder {
    steps: &[
        (10.0, "influential thought leader"),
        (3.0, "respected community member"),
        (1.0, "content creator"),
    ],
    fallback: "active community participant",
};

/// Quality tier, by average stars per repository.
pub const QUALITY: Ladder<f64> = Ladder {
    steps: &[
        (100.0, "creates highly valuable projects"),
        (20.0, "produces quality work"),
        (5.0, "develops useful projects"),
    ],
    fallback: "builds experimental projects",
};

/// Account age band, by whole years.
pub const ACCOUNT_AGE: Ladder<i64> = Ladder {
    steps: &[(5, "veteran"), (2, "experienced")],
    fallback: "newcomer",
};

/// Star-count band used by the closing assessment sentence.
pub const STAR_LEVEL: Ladder<u64> = Ladder {
    steps: &[(1_000, "high"), (100, "moderate")],
    fallback: "growing",
};

/// Community-impact phrase paired with [`STAR_LEVEL`].
pub const STAR_IMPACT: Ladder<u64> = Ladder {
    steps: &[
        (1_000, "significant community impact"),
        (100, "notable contributions"),
    ],
    fallback: "emerging potential",
};

/// Describe the language mix of a repository list.
///
/// `languages` is the ranked long-form slice (top five); the "other
/// languages" counts are relative to that slice, and the focus share is
/// relative to the full repository list (`repo_count`), repositories with
/// no language included.
pub fn tech_stack_description(languages: &[LanguageCount], repo_count: usize) -> String {
    match languages {
        [] => "No primary language detected".to_string(),
        [only] => format!("Specialized in {}", only.language),
        [top, rest @ ..] if f64::from(top.count) > repo_count as f64 * PRIMARY_FOCUS_SHARE => {
            format!(
                "Primarily focused on {} with {} other languages",
                top.language,
                rest.len()
            )
        }
        _ => {
            let listed: Vec<&str> = languages
                .iter()
                .take(TOP_LANGUAGES_SHORT)
                .map(|c| c.language.as_str())
                .collect();
            let extra = languages.len().saturating_sub(TOP_LANGUAGES_SHORT);
            if extra > 0 {
                format!(
                    "Versatile developer working with {} and {} more",
                    listed.join(", "),
                    extra
                )
            } else {
                format!("Versatile developer working with {}", listed.join(", "))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
