//! Edu Video Cache - a cache-backed educational video search service
//!
//! Memoizes expensive, rate-limited remote video search calls in bounded,
//! time-expiring in-memory caches.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod youtube;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
