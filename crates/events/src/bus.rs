//! In-process fan-out bus for theme propagation messages, backed by a
//! `tokio::sync::broadcast` channel.

use oddsmith_core::theme::OperatorTheme;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// A theme propagation message.
///
/// Serialized with a `type` tag so preview surfaces can dispatch on it:
///
/// ```json
/// { "type": "THEME_UPDATE", "theme": { ... } }
/// { "type": "HIGHLIGHT_ELEMENT", "elementType": "bet-slip" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ThemeEvent {
    /// The active theme changed; previews must re-apply it in full.
    #[serde(rename = "THEME_UPDATE")]
    ThemeUpdate { theme: OperatorTheme },

    /// A configuration control is being hovered; previews flag the
    /// matching rendered elements. `None` clears all highlighting.
    #[serde(rename = "HIGHLIGHT_ELEMENT")]
    HighlightElement {
        #[serde(rename = "elementType")]
        element_type: Option<String>,
    },
}

/// Publish/subscribe hub for [`ThemeEvent`]s.
///
/// Designed to be shared via `Arc<ThemeBus>`. Publishing is
/// fire-and-forget: with zero subscribers the event is dropped
/// silently, and slow subscribers observe `RecvError::Lagged` rather
/// than blocking the publisher.
pub struct ThemeBus {
    sender: broadcast::Sender<ThemeEvent>,
}

impl ThemeBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: ThemeEvent) {
        // SendError only means there are zero receivers right now.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ThemeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
