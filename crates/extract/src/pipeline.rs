//! The extraction pipeline: fetch, validate, infer, fall back.
//!
//! Every result is tagged with the stage that produced it so callers
//! (and the operator UI) can tell a genuine extraction from a
//! fingerprint guess.

use oddsmith_core::theme::{synthesize, ExtractedTheme, OperatorTheme};
use serde::Serialize;
use url::Url;

use crate::engine;
use crate::error::ExtractError;
use crate::fetch::{FetchHtml, RelayFetcher};
use crate::patterns;

/// Which stage produced the resulting theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Inferred from fetched page content.
    Full,
    /// Page content was fetched but carried no usable color or
    /// typography signal; extracted fragments are blended over the
    /// domain fingerprint.
    Mixed,
    /// No relay produced valid content; pure fingerprint fallback.
    Pattern,
}

/// Diagnostics attached to every extraction result.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionDebug {
    /// Relays tried, in order, with their outcomes.
    pub relays_attempted: Vec<String>,
    /// Length of the accepted payload, 0 when nothing was accepted.
    pub html_length: usize,
    /// Distinct colors harvested from the payload.
    pub colors_found: usize,
    /// Heuristic that chose the primary color, when one was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_source: Option<&'static str>,
}

/// Outcome of a theme extraction request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtractionResult {
    pub success: bool,
    /// The raw extracted fragments (post-fallback blending).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ExtractedTheme>,
    /// A complete theme synthesized from the fragments, ready to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<OperatorTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<ExtractionMethod>,
    pub debug: ExtractionDebug,
}

impl ThemeExtractionResult {
    fn failed(error: String) -> Self {
        Self {
            success: false,
            theme: None,
            suggested: None,
            error: Some(error),
            warnings: Vec::new(),
            method: None,
            debug: ExtractionDebug::default(),
        }
    }
}

/// Drives the full chain for one URL. Generic over the fetcher so tests
/// run against canned payloads.
pub struct ThemeExtractor<F: FetchHtml = RelayFetcher> {
    fetcher: F,
}

impl ThemeExtractor<RelayFetcher> {
    pub fn new() -> Self {
        Self {
            fetcher: RelayFetcher::new(),
        }
    }
}

impl Default for ThemeExtractor<RelayFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FetchHtml> ThemeExtractor<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Extract a theme for `raw_url`.
    ///
    /// Total for any input: URL problems come back as a failed result
    /// rather than an `Err`, and every fetch/signal failure degrades to
    /// the fingerprint fallback.
    pub async fn extract(&self, raw_url: &str) -> ThemeExtractionResult {
        let url = match normalize_url(raw_url) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(url = raw_url, error = %err, "Rejected extraction URL");
                return ThemeExtractionResult::failed(err.to_string());
            }
        };
        let target = url.to_string();

        // The fingerprint bundle is resolved up front; it backs both the
        // pattern and mixed stages. normalize_url guarantees parseability.
        let pattern = match patterns::match_domain(&target) {
            Ok(pattern) => pattern,
            Err(err) => return ThemeExtractionResult::failed(err.to_string()),
        };

        let mut warnings = Vec::new();
        let outcome = self.fetcher.fetch(&target).await;
        let relays_attempted: Vec<String> = outcome
            .attempts
            .iter()
            .map(|attempt| format!("{}: {:?}", attempt.relay, attempt.outcome))
            .collect();

        let Some(html) = outcome.html else {
            warnings.push("No relay returned usable content; theme is a domain-pattern match".to_string());
            if pattern.generic {
                warnings.push("Domain not recognized; using generic fallback colors".to_string());
            }
            tracing::info!(url = %target, operator = pattern.operator, "Extraction fell back to domain pattern");
            let suggested = synthesize::from_extracted(&pattern.theme);
            return ThemeExtractionResult {
                success: true,
                theme: Some(pattern.theme),
                suggested: Some(suggested),
                error: None,
                warnings,
                method: Some(ExtractionMethod::Pattern),
                debug: ExtractionDebug {
                    relays_attempted,
                    html_length: 0,
                    colors_found: 0,
                    primary_source: None,
                },
            };
        };

        let html_length = html.len();
        let inferred = engine::extract(&html, &target);

        let (theme, method) = if inferred.theme.has_color_signal()
            || inferred.theme.has_typography_signal()
        {
            (inferred.theme, ExtractionMethod::Full)
        } else {
            warnings.push(
                "Page content carried no color or typography signal; blending with domain pattern"
                    .to_string(),
            );
            (inferred.theme.merged_over(&pattern.theme), ExtractionMethod::Mixed)
        };

        if theme.colors.primary.is_none() {
            warnings.push("No primary color detected; synthesized theme uses defaults".to_string());
        }

        tracing::info!(
            url = %target,
            method = ?method,
            colors_found = inferred.colors_found,
            "Extraction complete"
        );

        let suggested = synthesize::from_extracted(&theme);
        ThemeExtractionResult {
            success: true,
            theme: Some(theme),
            suggested: Some(suggested),
            error: None,
            warnings,
            method: Some(method),
            debug: ExtractionDebug {
                relays_attempted,
                html_length,
                colors_found: inferred.colors_found,
                primary_source: inferred.primary_source.map(|source| source.as_str()),
            },
        }
    }
}

/// Normalize user input into a fetchable URL.
///
/// Schemeless input gets `https://` prepended; only `http`/`https`
/// survive.
pub fn normalize_url(raw: &str) -> Result<Url, ExtractError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::InvalidUrl(raw.to_string()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|_| ExtractError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ExtractError::UnsupportedScheme {
            scheme: scheme.to_string(),
            url: raw.to_string(),
        }),
    }
}
