//! YouTube Module
//!
//! Cache-backed educational video search over the YouTube Data API:
//! provider contract, reqwest client, duration formatting, and the
//! ranking/filtering service layer.

mod duration;
mod provider;
mod service;
mod types;

// Re-export public types
pub use duration::format_duration;
pub use provider::{VideoProvider, YouTubeClient};
pub use service::{ServiceCacheStats, YouTubeService};
pub use types::{
    DurationFilter, RemoteVideo, SearchHit, SearchOrder, SearchParams, Video, VideoDetails,
};
