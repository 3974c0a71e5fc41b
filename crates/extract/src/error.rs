/// Errors surfaced by the extraction subsystem.
///
/// Only URL problems ever reach callers as errors; every other failure
/// mode (relay exhaustion, weak signal) degrades into a fallback stage
/// inside the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Unable to process URL '{0}'")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { scheme: String, url: String },
}
