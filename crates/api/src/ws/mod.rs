//! WebSocket infrastructure for theme propagation.
//!
//! Provides connection management, the bus-to-socket forwarder,
//! heartbeat monitoring, and the HTTP upgrade handler used by Axum
//! routes. The channel is server-authoritative: previews receive
//! THEME_UPDATE / HIGHLIGHT_ELEMENT messages and may only send
//! PREVIEW_READY back.

mod forwarder;
mod handler;
mod heartbeat;
pub mod manager;

pub use forwarder::start_forwarder;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
