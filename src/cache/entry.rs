//! Cache Entry Module
//!
//! Defines the wrapper stored for each cached value, with absolute
//! creation and expiration instants.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value together with its lifecycle metadata.
///
/// Entries are never mutated after creation: overwriting a key replaces
/// the whole entry, and expiration removes it.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Instant the entry was created (drives oldest-first eviction)
    pub created_at: Instant,
    /// Absolute expiration instant
    pub expires_at: Instant,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    pub fn new(value: T, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's TTL has fully elapsed.
    ///
    /// Boundary condition: an entry is expired once the current instant is
    /// greater than or equal to `expires_at`.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or zero if the entry has expired.
    ///
    /// Useful for debugging and statistics.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
