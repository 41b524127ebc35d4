//! Video Domain Types
//!
//! Search parameters, provider records, and the ranked video result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Search Order ==
/// Result ordering accepted by the remote search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    #[default]
    Relevance,
    ViewCount,
    Rating,
    Date,
}

impl SearchOrder {
    /// Wire value used in the provider query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Relevance => "relevance",
            SearchOrder::ViewCount => "viewCount",
            SearchOrder::Rating => "rating",
            SearchOrder::Date => "date",
        }
    }
}

// == Duration Filter ==
/// Video length bucket accepted by the remote search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationFilter {
    Any,
    Short,
    #[default]
    Medium,
    Long,
}

impl DurationFilter {
    /// Wire value used in the provider query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationFilter::Any => "any",
            DurationFilter::Short => "short",
            DurationFilter::Medium => "medium",
            DurationFilter::Long => "long",
        }
    }
}

// == Search Params ==
/// Full parameter set for an educational video search.
///
/// Serialized into the cache key, so every field participates in
/// memoization identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free-text topic query
    pub query: String,
    /// Ceiling for the upstream search call (not the final answer size)
    pub max_results: u32,
    /// Result ordering
    pub order: SearchOrder,
    /// Video length bucket
    pub video_duration: DurationFilter,
}

// == Video ==
/// One fully constructed, ranked video candidate.
///
/// Either produced complete from the two-stage remote fetch or retrieved
/// verbatim from cache; candidates that cannot be completed are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Remote provider identifier
    pub video_id: String,
    pub title: String,
    pub description: String,
    /// Human-readable duration, `H:MM:SS` or `M:SS`
    pub duration: String,
    pub view_count: u64,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}

// == Search Hit ==
/// A raw hit from the first-stage search call, before detail enrichment.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}

// == Video Details ==
/// Per-identifier metadata from the second-stage batched detail lookup.
#[derive(Debug, Clone)]
pub struct VideoDetails {
    pub video_id: String,
    /// Machine-readable ISO-8601 duration, e.g. `PT1H30M20S`
    pub duration: String,
    pub view_count: u64,
}

// == Remote Video ==
/// Complete record returned by the single-item lookup endpoint.
#[derive(Debug, Clone)]
pub struct RemoteVideo {
    pub video_id: String,
    pub title: String,
    pub description: String,
    /// Machine-readable ISO-8601 duration
    pub duration: String,
    pub view_count: u64,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}
