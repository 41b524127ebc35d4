//! YouTube Service Module
//!
//! Cache-backed educational video search: memoizes the expensive two-stage
//! remote fetch, filters out unpopular and incomplete candidates, and
//! returns a short ranked list.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{generate_key, CacheManager, CacheStats};
use crate::error::Result;
use crate::youtube::duration::format_duration;
use crate::youtube::provider::VideoProvider;
use crate::youtube::types::{SearchParams, Video};

// == Policy Constants ==
/// Fixed keywords appended to every query to bias results toward
/// tutorial and course content.
const EDUCATIONAL_QUERY_SUFFIX: &str = "tutorial programming development course";

/// Minimum view count below which a candidate is dropped. A quality gate,
/// not a correctness requirement.
const MIN_VIEW_COUNT: u64 = 1_000;

/// Final answer size, independent of the caller's `max_results` ceiling.
const TOP_RESULT_COUNT: usize = 3;

/// TTL for cached results. Video metadata for a fixed query is treated as
/// slowly changing, so this is far longer than the cache's default policy.
const RESULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

// == Service Cache Stats ==
/// Per-tier statistics snapshot for the service's cache instances.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCacheStats {
    /// Search-result tier
    pub search: CacheStats,
    /// Single-video tier
    pub videos: CacheStats,
}

// == YouTube Service ==
/// Cache-backed client for the remote video search provider.
///
/// Owns no global state: the provider and both cache tiers are injected at
/// construction, one instance per process.
pub struct YouTubeService {
    provider: Arc<dyn VideoProvider>,
    search_cache: Arc<RwLock<CacheManager<Vec<Video>>>>,
    video_cache: Arc<RwLock<CacheManager<Video>>>,
}

impl YouTubeService {
    // == Constructor ==
    /// Creates a service over the given provider and cache tiers.
    pub fn new(
        provider: Arc<dyn VideoProvider>,
        search_cache: Arc<RwLock<CacheManager<Vec<Video>>>>,
        video_cache: Arc<RwLock<CacheManager<Video>>>,
    ) -> Self {
        Self {
            provider,
            search_cache,
            video_cache,
        }
    }

    // == Search ==
    /// Returns a ranked, deduplicated short list of educational videos.
    ///
    /// On a cache hit no remote call occurs. On a miss, the two-stage
    /// fetch (search, then batched detail lookup) runs; failure of either
    /// stage propagates to the caller. Survivors are filtered by the
    /// popularity floor, scored, sorted, truncated to the top three, and
    /// cached for 24 hours.
    ///
    /// Concurrent misses for the same key both fetch; the last writer
    /// wins. There is no in-flight deduplication.
    pub async fn search_educational_videos(&self, params: &SearchParams) -> Result<Vec<Video>> {
        let cache_key = search_cache_key(params);

        {
            let mut cache = self.search_cache.write().await;
            if let Some(videos) = cache.get(&cache_key) {
                debug!(key = %cache_key, "search cache hit");
                return Ok(videos);
            }
        }
        debug!(key = %cache_key, "search cache miss");

        let enhanced_query = format!("{} {}", params.query, EDUCATIONAL_QUERY_SUFFIX);
        let hits = self
            .provider
            .search(
                &enhanced_query,
                params.max_results,
                params.order,
                params.video_duration,
            )
            .await?;

        if hits.is_empty() {
            return Ok(Vec::new());
        }

        let video_ids: Vec<String> = hits.iter().map(|hit| hit.video_id.clone()).collect();
        let details = self.provider.details(&video_ids).await?;
        let details_by_id: HashMap<String, _> = details
            .into_iter()
            .map(|detail| (detail.video_id.clone(), detail))
            .collect();

        let now = Utc::now();
        let mut videos: Vec<Video> = hits
            .into_iter()
            .filter_map(|hit| {
                // A hit without a detail record cannot be completed; drop it
                let detail = details_by_id.get(&hit.video_id)?;

                if detail.view_count < MIN_VIEW_COUNT {
                    return None;
                }

                Some(Video {
                    video_id: hit.video_id,
                    title: hit.title,
                    description: hit.description,
                    duration: format_duration(&detail.duration),
                    view_count: detail.view_count,
                    thumbnail_url: hit.thumbnail_url,
                    channel_title: hit.channel_title,
                    published_at: hit.published_at,
                })
            })
            .collect();

        // Score combines view count with age in days. The age term is
        // additive, so older videos outrank newer ones at equal view
        // counts; see the regression test pinning this ordering.
        let score = |video: &Video| -> f64 {
            let age_days = (now - video.published_at).num_seconds() as f64 / 86_400.0;
            video.view_count as f64 * 0.7 + age_days * 0.3
        };
        videos.sort_by(|a, b| {
            score(b)
                .partial_cmp(&score(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        videos.truncate(TOP_RESULT_COUNT);

        {
            let mut cache = self.search_cache.write().await;
            cache.set(cache_key, videos.clone(), Some(RESULT_TTL));
        }

        Ok(videos)
    }

    // == Video Lookup ==
    /// Best-effort single-video lookup. Never fails: provider errors and
    /// unknown identifiers both read as absent.
    pub async fn video_by_id(&self, video_id: &str) -> Option<Video> {
        let cache_key = format!("youtube:video:{}", video_id);

        {
            let mut cache = self.video_cache.write().await;
            if let Some(video) = cache.get(&cache_key) {
                debug!(key = %cache_key, "video cache hit");
                return Some(video);
            }
        }

        let remote = match self.provider.video_by_id(video_id).await {
            Ok(Some(remote)) => remote,
            Ok(None) => return None,
            Err(error) => {
                warn!(%video_id, %error, "video lookup failed, returning absent");
                return None;
            }
        };

        let video = Video {
            video_id: remote.video_id,
            title: remote.title,
            description: remote.description,
            duration: format_duration(&remote.duration),
            view_count: remote.view_count,
            thumbnail_url: remote.thumbnail_url,
            channel_title: remote.channel_title,
            published_at: remote.published_at,
        };

        let mut cache = self.video_cache.write().await;
        cache.set(cache_key, video.clone(), Some(RESULT_TTL));

        Some(video)
    }

    // == Cache Stats ==
    /// Snapshot of both cache tiers' statistics.
    pub async fn cache_stats(&self) -> ServiceCacheStats {
        ServiceCacheStats {
            search: self.search_cache.read().await.stats(),
            videos: self.video_cache.read().await.stats(),
        }
    }
}

// == Cache Key ==
/// Derives the memoization key from the full canonicalized parameter set.
fn search_cache_key(params: &SearchParams) -> String {
    let value = serde_json::to_value(params).expect("search params always serialize");
    match value {
        serde_json::Value::Object(map) => generate_key("youtube:search", Some(&map)),
        _ => generate_key("youtube:search", None),
    }
}
