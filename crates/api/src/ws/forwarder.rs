use std::sync::Arc;

use axum::extract::ws::Message;
use oddsmith_events::ThemeBus;
use tokio::sync::broadcast::error::RecvError;

use crate::ws::manager::WsManager;

/// Spawn the bus-to-socket forwarder.
///
/// Subscribes to the theme bus and broadcasts every event, serialized
/// as JSON text, to all connected previews. Exits when the bus sender
/// side is dropped (shutdown).
pub fn start_forwarder(
    bus: Arc<ThemeBus>,
    ws_manager: Arc<WsManager>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut rx = bus.subscribe();
        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => ws_manager.broadcast(Message::Text(json.into())).await,
                    Err(e) => tracing::error!(error = %e, "Failed to serialize theme event"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    // Previews re-apply full snapshots, so dropped
                    // intermediate updates are harmless.
                    tracing::warn!(skipped, "Theme forwarder lagged");
                }
                Err(RecvError::Closed) => {
                    tracing::info!("Theme bus closed; forwarder stopping");
                    break;
                }
            }
        }
    })
}
