// crates/github/src/lib.rs
//! Fetch aggregator for the upstream hosting API.
//!
//! Provides the typed reqwest client with read-through TTL caching of
//! immutable snapshots, best-effort commit sampling, and the comparison
//! metrics reducer. All network I/O for octolens lives in this crate.

pub mod cache;
pub mod client;
pub mod compare;
pub mod error;

pub use client::{GithubClient, GithubConfig};
pub use compare::{compare_users, validate_pair, CompareError, Comparison, ValidationError};
pub use error::GithubError;
