//! API Module
//!
//! HTTP handlers and routing for the video service REST API.
//!
//! # Endpoints
//! - `POST /videos/search` - Ranked educational video search
//! - `GET /videos/:id` - Single-video lookup
//! - `GET /cache/stats` - Per-tier cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
