// crates/github/src/cache.rs
//! Read-through TTL cache for upstream snapshots.
//!
//! Entries are immutable `Arc` snapshots with an `Instant`-based expiry —
//! never mutated in place, so concurrent readers are safe. Uses
//! `std::sync::RwLock` (not `tokio::sync::RwLock`) because:
//! - Entries are written once per refetch and read many times
//! - The lock is never held across an `.await` point

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

struct Entry<V> {
    stored_at: Instant,
    value: Arc<V>,
}

/// A TTL cache keyed by `K`, storing shared snapshots of `V`.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached snapshot unless it is missing or expired.
    /// Staleness is not an error — the caller refetches.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let entries = self.entries.read().expect("cache lock poisoned");
        let entry = entries.get(key)?;
        (entry.stored_at.elapsed() <= self.ttl).then(|| Arc::clone(&entry.value))
    }

    /// Store a fresh snapshot, returning the shared handle.
    pub fn insert(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(
            key,
            Entry {
                stored_at: Instant::now(),
                value: Arc::clone(&value),
            },
        );
        value
    }
}

// ============================================================================
// Tests
// ============================================================================
