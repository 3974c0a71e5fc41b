//! Theme propagation: the cross-boundary message protocol and the
//! in-process bus that carries it.
//!
//! The editing surface publishes [`ThemeEvent`]s on a [`ThemeBus`];
//! delivery layers (the api crate's WebSocket forwarder) fan them out
//! to preview surfaces, which apply them as modeled by
//! [`PreviewDocument`].

pub mod bus;
pub mod preview;

pub use bus::{ThemeBus, ThemeEvent};
pub use preview::PreviewDocument;
