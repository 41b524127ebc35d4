//! Response DTOs for the video service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::youtube::{ServiceCacheStats, Video};

/// Response body for the video search operation (POST /videos/search)
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Ranked video results
    pub videos: Vec<Video>,
    /// Number of results returned
    pub count: usize,
}

impl SearchResponse {
    /// Creates a new SearchResponse
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            count: videos.len(),
            videos,
        }
    }
}

/// Statistics for a single cache tier, with derived rates.
#[derive(Debug, Clone, Serialize)]
pub struct TierStats {
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_requests: u64,
    pub hit_rate: f64,
    pub miss_rate: f64,
}

impl From<CacheStats> for TierStats {
    fn from(stats: CacheStats) -> Self {
        Self {
            size: stats.size,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_requests: stats.total_requests(),
            hit_rate: stats.hit_rate(),
            miss_rate: stats.miss_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Search-result cache tier
    pub search: TierStats,
    /// Single-video cache tier
    pub videos: TierStats,
}

impl StatsResponse {
    /// Creates a new StatsResponse from the service's per-tier snapshot
    pub fn new(stats: ServiceCacheStats) -> Self {
        Self {
            search: stats.search.into(),
            videos: stats.videos.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_video() -> Video {
        Video {
            video_id: "abc".to_string(),
            title: "Rust".to_string(),
            description: "desc".to_string(),
            duration: "5:09".to_string(),
            view_count: 2_000,
            thumbnail_url: "https://example.com/t.jpg".to_string(),
            channel_title: "TestChannel".to_string(),
            published_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_response_count() {
        let resp = SearchResponse::new(vec![sample_video(), sample_video()]);
        assert_eq!(resp.count, 2);
        assert_eq!(resp.videos.len(), 2);
    }

    #[test]
    fn test_search_response_serialize() {
        let resp = SearchResponse::new(vec![sample_video()]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"count\":1"));
        assert!(json.contains("videoId"));
    }

    #[test]
    fn test_tier_stats_rates() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        let tier: TierStats = stats.into();
        assert_eq!(tier.total_requests, 4);
        assert!((tier.hit_rate - 0.75).abs() < 0.001);
        assert!((tier.miss_rate - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
