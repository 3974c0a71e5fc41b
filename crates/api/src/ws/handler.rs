use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use oddsmith_events::ThemeEvent;

use crate::state::AppState;

/// Delay before the post-connect theme resend.
///
/// A preview iframe that has just connected may not have finished
/// booting its own listener when the first snapshot arrives; a short
/// delayed resend covers that race without any handshake.
const PREVIEW_RESEND_DELAY_MS: u64 = 100;

/// The only message previews are allowed to send.
const PREVIEW_READY: &str = "PREVIEW_READY";

/// HTTP handler that upgrades the connection to WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single preview connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager`.
///   2. Sends the active theme snapshot, plus a delayed resend.
///   3. Spawns a sender task that forwards messages from the manager
///      channel.
///   4. Processes inbound messages on the current task; only
///      `PREVIEW_READY` does anything (another snapshot resend).
///   5. Cleans up on disconnect.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "Preview WebSocket connected");

    let mut rx = state.ws_manager.add(conn_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Initial snapshot, plus a delayed resend for previews that were
    // still booting when the first one arrived.
    send_snapshot(&state, &conn_id).await;
    {
        let state = state.clone();
        let conn_id = conn_id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(PREVIEW_RESEND_DELAY_MS)).await;
            send_snapshot(&state, &conn_id).await;
        });
    }

    // Receiver loop: the channel is server-authoritative, so inbound
    // traffic is PREVIEW_READY or noise.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(Message::Text(text)) => {
                if is_preview_ready(&text) {
                    tracing::debug!(conn_id = %conn_id, "Preview ready; resending theme");
                    send_snapshot(&state, &conn_id).await;
                } else {
                    tracing::debug!(conn_id = %conn_id, "Ignoring inbound preview message");
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Preview WebSocket disconnected");
}

/// Send the current active theme to one connection.
async fn send_snapshot(state: &AppState, conn_id: &str) {
    let event = ThemeEvent::ThemeUpdate {
        theme: state.store.active_theme().await,
    };
    match serde_json::to_string(&event) {
        Ok(json) => {
            state.ws_manager.send_to(conn_id, Message::Text(json.into())).await;
        }
        Err(e) => tracing::error!(error = %e, "Failed to serialize theme snapshot"),
    }
}

/// Accept both the bare string and a `{ "type": "PREVIEW_READY" }`
/// envelope.
fn is_preview_ready(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed == PREVIEW_READY {
        return true;
    }
    serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|v| v.get("type").and_then(|t| t.as_str()).map(|t| t == PREVIEW_READY))
        .unwrap_or(false)
}
