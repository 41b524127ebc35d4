//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// YouTube Data API key
    pub youtube_api_key: String,
    /// Entry ceiling for the search-result cache tier
    pub search_cache_max_entries: usize,
    /// Default TTL in seconds for the search-result cache tier
    pub search_cache_ttl: u64,
    /// Entry ceiling for the single-video cache tier
    pub video_cache_max_entries: usize,
    /// Default TTL in seconds for the single-video cache tier
    pub video_cache_ttl: u64,
    /// Periodic expired-entry sweep interval in seconds, 0 = disabled
    /// (expiration is lazy either way; the sweep only reclaims memory
    /// held by expired-but-unaccessed entries)
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `YOUTUBE_API_KEY` - YouTube Data API key (default: empty)
    /// - `SEARCH_CACHE_MAX_ENTRIES` - Search tier entry ceiling (default: 100)
    /// - `SEARCH_CACHE_TTL` - Search tier default TTL in seconds (default: 300)
    /// - `VIDEO_CACHE_MAX_ENTRIES` - Video tier entry ceiling (default: 200)
    /// - `VIDEO_CACHE_TTL` - Video tier default TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Sweep interval in seconds, 0 disables (default: 0)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            search_cache_max_entries: env::var("SEARCH_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            search_cache_ttl: env::var("SEARCH_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            video_cache_max_entries: env::var("VIDEO_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            video_cache_ttl: env::var("VIDEO_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Cache policy for the search-result tier.
    pub fn search_cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_age: Duration::from_secs(self.search_cache_ttl),
            max_size: self.search_cache_max_entries,
        }
    }

    /// Cache policy for the single-video tier.
    pub fn video_cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_age: Duration::from_secs(self.video_cache_ttl),
            max_size: self.video_cache_max_entries,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            youtube_api_key: String::new(),
            search_cache_max_entries: 100,
            search_cache_ttl: 300,
            video_cache_max_entries: 200,
            video_cache_ttl: 300,
            cleanup_interval: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.search_cache_max_entries, 100);
        assert_eq!(config.search_cache_ttl, 300);
        assert_eq!(config.video_cache_max_entries, 200);
        assert_eq!(config.cleanup_interval, 0);
        assert!(config.youtube_api_key.is_empty());
    }

    #[test]
    fn test_cache_configs_from_settings() {
        let config = Config::default();

        let search = config.search_cache_config();
        assert_eq!(search.max_age, Duration::from_secs(300));
        assert_eq!(search.max_size, 100);

        let video = config.video_cache_config();
        assert_eq!(video.max_size, 200);
    }
}
