use std::sync::Arc;

use oddsmith_events::ThemeBus;
use oddsmith_extract::{FetchHtml, ThemeExtractor};
use oddsmith_store::BrandStore;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Brand and active-theme storage.
    pub store: Arc<BrandStore>,
    /// Theme propagation bus.
    pub bus: Arc<ThemeBus>,
    /// WebSocket connection manager (preview clients).
    pub ws_manager: Arc<WsManager>,
    /// Theme extraction pipeline. Boxed fetcher so tests can swap in a
    /// canned one.
    pub extractor: Arc<ThemeExtractor<Box<dyn FetchHtml>>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
