//! Video Provider Module
//!
//! The remote provider contract plus its YouTube Data API v3 implementation.
//! The trait seam lets the service layer be exercised with stub providers
//! in tests while production traffic goes through reqwest.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::youtube::types::{DurationFilter, RemoteVideo, SearchHit, SearchOrder, VideoDetails};

/// Default YouTube Data API v3 endpoint.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Timeout applied to every remote call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// == Video Provider Trait ==
/// Contract required from the remote video search provider.
///
/// `search` and `details` are the two-stage fetch behind the primary
/// listing; both are hard failures when the upstream answers non-success.
/// `video_by_id` backs the best-effort single-item lookup.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// First-stage free-text search, restricted to embeddable and
    /// syndicated videos.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
        video_duration: DurationFilter,
    ) -> Result<Vec<SearchHit>>;

    /// Second-stage batched detail lookup for duration and view count.
    async fn details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>>;

    /// Single-item lookup returning the complete record, or `None` when
    /// the provider has no such identifier.
    async fn video_by_id(&self, video_id: &str) -> Result<Option<RemoteVideo>>;
}

// == Wire Types ==
// JSON shapes of the YouTube Data API v3 responses.

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchListItem>,
}

#[derive(Debug, Deserialize)]
struct SearchListItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    description: String,
    thumbnails: Thumbnails,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    medium: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoListItem>,
}

#[derive(Debug, Deserialize)]
struct VideoListItem {
    id: String,
    #[serde(rename = "contentDetails")]
    content_details: ContentDetails,
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

#[derive(Debug, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount", default)]
    view_count: Option<String>,
}

impl Statistics {
    /// View counts arrive as decimal strings; anything unparseable counts
    /// as zero, matching the provider's occasional hidden-statistics videos.
    fn view_count(&self) -> u64 {
        self.view_count
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Deserialize)]
struct FullVideoListResponse {
    #[serde(default)]
    items: Vec<FullVideoItem>,
}

#[derive(Debug, Deserialize)]
struct FullVideoItem {
    id: String,
    snippet: Snippet,
    #[serde(rename = "contentDetails")]
    content_details: ContentDetails,
    statistics: Statistics,
}

// == YouTube Client ==
/// reqwest-backed `VideoProvider` against the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    // == Constructor ==
    /// Creates a client against the public YouTube API endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client construction failed");

        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Issues a GET and fails hard on any non-success status.
    async fn get_checked(&self, path: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "requesting YouTube API");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl VideoProvider for YouTubeClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
        video_duration: DurationFilter,
    ) -> Result<Vec<SearchHit>> {
        let response = self
            .get_checked(
                "search",
                &[
                    ("key", self.api_key.clone()),
                    ("q", query.to_string()),
                    ("part", "snippet".to_string()),
                    ("type", "video".to_string()),
                    ("maxResults", max_results.to_string()),
                    ("order", order.as_str().to_string()),
                    ("videoDuration", video_duration.as_str().to_string()),
                    ("videoEmbeddable", "true".to_string()),
                    ("videoSyndicated", "true".to_string()),
                ],
            )
            .await?;

        let body: SearchListResponse = response.json().await?;

        Ok(body
            .items
            .into_iter()
            .map(|item| SearchHit {
                video_id: item.id.video_id,
                title: item.snippet.title,
                description: item.snippet.description,
                thumbnail_url: item.snippet.thumbnails.medium.url,
                channel_title: item.snippet.channel_title,
                published_at: item.snippet.published_at,
            })
            .collect())
    }

    async fn details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>> {
        let response = self
            .get_checked(
                "videos",
                &[
                    ("key", self.api_key.clone()),
                    ("id", video_ids.join(",")),
                    ("part", "contentDetails,statistics".to_string()),
                ],
            )
            .await?;

        let body: VideoListResponse = response.json().await?;

        Ok(body
            .items
            .into_iter()
            .map(|item| VideoDetails {
                view_count: item.statistics.view_count(),
                duration: item.content_details.duration,
                video_id: item.id,
            })
            .collect())
    }

    async fn video_by_id(&self, video_id: &str) -> Result<Option<RemoteVideo>> {
        let response = self
            .get_checked(
                "videos",
                &[
                    ("key", self.api_key.clone()),
                    ("id", video_id.to_string()),
                    ("part", "snippet,contentDetails,statistics".to_string()),
                ],
            )
            .await?;

        let body: FullVideoListResponse = response.json().await?;

        Ok(body.items.into_iter().next().map(|item| RemoteVideo {
            view_count: item.statistics.view_count(),
            duration: item.content_details.duration,
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url: item.snippet.thumbnails.medium.url,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            video_id: item.id,
        }))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_view_count_parsing() {
        let stats = Statistics {
            view_count: Some("12345".to_string()),
        };
        assert_eq!(stats.view_count(), 12345);
    }

    #[test]
    fn test_statistics_missing_view_count() {
        let stats = Statistics { view_count: None };
        assert_eq!(stats.view_count(), 0);
    }

    #[test]
    fn test_statistics_unparseable_view_count() {
        let stats = Statistics {
            view_count: Some("not-a-number".to_string()),
        };
        assert_eq!(stats.view_count(), 0);
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "items": [{
                "id": {"videoId": "abc123"},
                "snippet": {
                    "title": "Rust Ownership",
                    "description": "A tutorial",
                    "thumbnails": {"medium": {"url": "https://example.com/t.jpg"}},
                    "channelTitle": "RustChannel",
                    "publishedAt": "2024-01-15T10:00:00Z"
                }
            }]
        }"#;

        let body: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].id.video_id, "abc123");
        assert_eq!(body.items[0].snippet.channel_title, "RustChannel");
    }

    #[test]
    fn test_video_list_response_empty_items_default() {
        let body: VideoListResponse = serde_json::from_str("{}").unwrap();
        assert!(body.items.is_empty());
    }
}
