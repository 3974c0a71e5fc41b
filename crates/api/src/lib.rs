//! HTTP and WebSocket surface of the white-label demo platform.
//!
//! Exposed as a library so integration tests can build the exact same
//! router (middleware stack included) that `main.rs` serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;

pub use error::{AppError, AppResult};
pub use router::build_app_router;
