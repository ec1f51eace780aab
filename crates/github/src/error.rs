// crates/github/src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the upstream fetch aggregator.
///
/// `NotFound` is surfaced to the user verbatim; the other kinds render as
/// a generic "failed to fetch" message at the API boundary.
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("user not found: {handle}")]
    NotFound { handle: String },

    #[error("upstream request failed with status {status}")]
    Upstream { status: StatusCode },

    #[error("network error reaching upstream: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode upstream response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid client configuration: {message}")]
    Config { message: String },
}
