//! Receiver-side model of a live preview surface.
//!
//! A preview is a separate document that only sees [`ThemeEvent`]s. It
//! applies `THEME_UPDATE` as CSS custom properties on its root and
//! tracks which element type is currently highlighted. Modeling it here
//! keeps the protocol's receiver contract (idempotence, tolerance of
//! out-of-order highlights) testable without a browser.

use std::collections::BTreeMap;

use oddsmith_core::theme::css;

use crate::bus::ThemeEvent;

/// The state a preview document derives from received theme events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewDocument {
    /// CSS custom properties currently set on the document root.
    vars: BTreeMap<String, String>,
    /// Element type currently flagged for highlighting, if any.
    highlighted: Option<String>,
}

impl PreviewDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a received event.
    ///
    /// `THEME_UPDATE` replaces the full custom-property set, so applying
    /// the same update twice is a no-op. `HIGHLIGHT_ELEMENT` replaces
    /// the highlight (clearing any previous one); a highlight arriving
    /// before any theme is harmless.
    pub fn apply(&mut self, event: &ThemeEvent) {
        match event {
            ThemeEvent::ThemeUpdate { theme } => {
                self.vars = css::custom_properties(theme);
                tracing::debug!(vars = self.vars.len(), "Applied theme update to preview");
            }
            ThemeEvent::HighlightElement { element_type } => {
                self.highlighted = element_type.clone();
            }
        }
    }

    /// Value of a CSS custom property, if set.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// All custom properties currently set.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// The currently highlighted element type.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}
