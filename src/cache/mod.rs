//! Cache Module
//!
//! Generic in-memory response caching with TTL expiration and bounded-size
//! eviction. Multiple instances with independent policies can coexist; each
//! owns its own key space and statistics.

mod entry;
mod key;
mod manager;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use key::generate_key;
pub use manager::{CacheConfig, CacheManager};
pub use stats::CacheStats;
