// crates/core/src/config.rs
//! Named constants for the insight heuristics.
//!
//! The window sizes and share cutoffs are fixed product constants carried
//! over from the shipped behavior; they live here so the ladders and
//! metric helpers never embed bare magic numbers.

/// Repositories updated within this many days count as "recent".
pub const RECENT_WINDOW_DAYS: i64 = 90;

/// Whole-year account age uses a flat 365-day year; leap days are ignored.
pub const DAYS_PER_YEAR: i64 = 365;

/// Languages shown in the distribution line of the narrative (long form).
pub const TOP_LANGUAGES_LONG: usize = 5;

/// Languages listed in the "versatile developer" sentence (short form).
pub const TOP_LANGUAGES_SHORT: usize = 3;

/// A top language covering more than this share of the repository list
/// makes the profile "primarily focused" on it.
pub const PRIMARY_FOCUS_SHARE: f64 = 0.6;

/// Above this share the closing assessment reads the focus as specialized
/// expertise rather than versatile problem solving.
pub const SPECIALIZATION_SHARE: f64 = 0.4;
