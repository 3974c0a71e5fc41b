//! Theme extraction: best-effort inference of an operator theme from a
//! third-party website.
//!
//! The pipeline is an explicit ordered chain of attempt → validate →
//! fallback stages: relay fetching ([`fetch`]), payload validation
//! ([`content`]), heuristic inference from markup ([`engine`]), and the
//! domain fingerprint fallback ([`patterns`]). [`pipeline`] ties the
//! stages together and tags every result with the stage that produced
//! it. Everything here is heuristic: the output is a suggestion for an
//! operator to review, never a guarantee.

pub mod content;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod patterns;
pub mod pipeline;

pub use error::ExtractError;
pub use fetch::{FetchHtml, RelayFetcher};
pub use pipeline::{ExtractionDebug, ExtractionMethod, ThemeExtractionResult, ThemeExtractor};
