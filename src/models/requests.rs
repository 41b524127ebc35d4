//! Request DTOs for the video service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::youtube::{DurationFilter, SearchOrder, SearchParams};

fn default_max_results() -> u32 {
    10
}

/// Request body for the video search operation (POST /videos/search)
///
/// # Fields
/// - `query`: Free-text topic to search for
/// - `max_results`: Ceiling for the upstream search call (default: 10)
/// - `order`: Result ordering (default: relevance)
/// - `video_duration`: Video length bucket (default: medium)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// The topic to search for
    pub query: String,
    /// Upstream result-count ceiling
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Result ordering
    #[serde(default)]
    pub order: SearchOrder,
    /// Video length bucket
    #[serde(default)]
    pub video_duration: DurationFilter,
}

impl SearchRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.query.trim().is_empty() {
            return Some("Query cannot be empty".to_string());
        }
        if self.max_results == 0 || self.max_results > 50 {
            return Some("maxResults must be between 1 and 50".to_string());
        }
        None
    }

    /// Converts the request into service-layer search parameters.
    pub fn into_params(self) -> SearchParams {
        SearchParams {
            query: self.query,
            max_results: self.max_results,
            order: self.order,
            video_duration: self.video_duration,
        }
    }
}
