//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expired-entry sweep: purges expired cache entries at configured
//!   intervals (optional; expiration works lazily without it)

mod cleanup;

pub use cleanup::spawn_cleanup_task;
