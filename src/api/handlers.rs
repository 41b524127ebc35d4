//! API Handlers
//!
//! HTTP request handlers for each video service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{CacheConfig, CacheManager};
use crate::error::{AppError, Result};
use crate::models::{HealthResponse, SearchRequest, SearchResponse, StatsResponse};
use crate::youtube::{Video, VideoProvider, YouTubeService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-backed video search service
    pub service: Arc<YouTubeService>,
}

impl AppState {
    /// Creates a new AppState over an already-constructed service.
    pub fn new(service: YouTubeService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState over a provider and cache policies.
    ///
    /// Builds the two cache tiers and wires them into the service. Cache
    /// instances are constructed once here and shared by reference from
    /// then on.
    pub fn with_provider(
        provider: Arc<dyn VideoProvider>,
        search_config: CacheConfig,
        video_config: CacheConfig,
    ) -> Self {
        let search_cache = Arc::new(RwLock::new(CacheManager::new(search_config)));
        let video_cache = Arc::new(RwLock::new(CacheManager::new(video_config)));
        Self::new(YouTubeService::new(provider, search_cache, video_cache))
    }
}

/// Handler for POST /videos/search
///
/// Returns a ranked short list of educational videos for the query.
/// Upstream failures surface as 502; callers apply their own fallback.
pub async fn search_videos_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let videos = state
        .service
        .search_educational_videos(&req.into_params())
        .await?;

    Ok(Json(SearchResponse::new(videos)))
}

/// Handler for GET /videos/:id
///
/// Best-effort single-video lookup; absent videos answer 404.
pub async fn get_video_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<Video>> {
    match state.service.video_by_id(&video_id).await {
        Some(video) => Ok(Json(video)),
        None => Err(AppError::NotFound(video_id)),
    }
}

/// Handler for GET /cache/stats
///
/// Returns per-tier cache statistics.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache_stats().await;
    Json(StatsResponse::new(stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::youtube::{
        DurationFilter, RemoteVideo, SearchHit, SearchOrder, VideoDetails,
    };

    /// Minimal canned provider for handler tests.
    struct CannedProvider {
        video: Option<RemoteVideo>,
    }

    #[async_trait]
    impl VideoProvider for CannedProvider {
        async fn search(
            &self,
            _query: &str,
            _max_results: u32,
            _order: SearchOrder,
            _video_duration: DurationFilter,
        ) -> Result<Vec<SearchHit>> {
            Ok(Vec::new())
        }

        async fn details(&self, _video_ids: &[String]) -> Result<Vec<VideoDetails>> {
            Ok(Vec::new())
        }

        async fn video_by_id(&self, _video_id: &str) -> Result<Option<RemoteVideo>> {
            Ok(self.video.clone())
        }
    }

    fn canned_state(video: Option<RemoteVideo>) -> AppState {
        AppState::with_provider(
            Arc::new(CannedProvider { video }),
            CacheConfig::default(),
            CacheConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_search_handler_rejects_empty_query() {
        let state = canned_state(None);

        let req = SearchRequest {
            query: "".to_string(),
            max_results: 10,
            order: SearchOrder::Relevance,
            video_duration: DurationFilter::Medium,
        };
        let result = search_videos_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_search_handler_empty_results() {
        let state = canned_state(None);

        let req = SearchRequest {
            query: "rust".to_string(),
            max_results: 10,
            order: SearchOrder::Relevance,
            video_duration: DurationFilter::Medium,
        };
        let response = search_videos_handler(State(state), Json(req)).await.unwrap();
        assert_eq!(response.0.count, 0);
    }

    #[tokio::test]
    async fn test_get_video_handler_not_found() {
        let state = canned_state(None);

        let result = get_video_handler(State(state), Path("missing".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_video_handler_found() {
        let state = canned_state(Some(RemoteVideo {
            video_id: "abc".to_string(),
            title: "Rust".to_string(),
            description: "desc".to_string(),
            duration: "PT5M9S".to_string(),
            view_count: 2_000,
            thumbnail_url: "https://example.com/t.jpg".to_string(),
            channel_title: "TestChannel".to_string(),
            published_at: Utc::now(),
        }));

        let response = get_video_handler(State(state), Path("abc".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.video_id, "abc");
        assert_eq!(response.0.duration, "5:09");
    }

    #[tokio::test]
    async fn test_stats_handler_starts_empty() {
        let state = canned_state(None);

        let response = cache_stats_handler(State(state)).await;
        assert_eq!(response.0.search.size, 0);
        assert_eq!(response.0.videos.size, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.0.status, "healthy");
    }
}
