//! Core domain logic for the oddsmith theming platform.
//!
//! Pure types and functions only: color math, heuristic color
//! classification, the operator theme model, theme synthesis, and the
//! CSS custom-property mapping. No I/O lives in this crate.

pub mod brand;
pub mod color;
pub mod error;
pub mod theme;
pub mod types;

pub use error::CoreError;
