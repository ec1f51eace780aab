// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use octolens_github::GithubClient;

use crate::notes::NoteStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Upstream API client with its read-through snapshot caches.
    pub github: GithubClient,
    /// File-backed note storage.
    pub notes: NoteStore,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(github: GithubClient, notes: NoteStore) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            github,
            notes,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
