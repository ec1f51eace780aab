// crates/core/src/lib.rs
//! Insight generation core for octolens.
//!
//! This crate turns a fetched profile and repository list into derived
//! metrics, qualitative tier labels, and the rendered narrative string.
//! Everything here is pure: no I/O, no clocks (`now` is always a
//! parameter), no hidden state.

pub mod config;
pub mod error;
pub mod metrics;
pub mod summary;
pub mod templates;
pub mod tiers;

pub use error::InsightError;
pub use metrics::{derive_metrics, language_histogram, DerivedMetrics, LanguageCount, MostStarred};
pub use summary::generate_summary;
