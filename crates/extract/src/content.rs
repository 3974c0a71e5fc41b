//! Validation of relay payloads.
//!
//! Relays frequently return block pages, geo-walls, or their own error
//! envelopes with a 200 status, so every payload is screened before the
//! engine sees it. The rules are tiered: unambiguous block phrases
//! reject outright; ambiguous phrases only reject in combination and in
//! an error context; acceptance requires either betting-domain
//! vocabulary or enough genuine page structure.

/// Phrases that always indicate a block/error page.
const HARD_BLOCK_PHRASES: &[&str] = &[
    "ip address has been blocked",
    "your ip has been banned",
    "access denied",
    "request blocked",
    "geoblocked",
    "geo-blocked",
    "error 403",
    "error 404",
    "error 503",
    "403 forbidden",
    "502 bad gateway",
];

/// Phrases that appear on block pages but also on legitimate pages
/// (a sportsbook footer mentioning "responsible gambling ... captcha"
/// must not be rejected). These only reject when at least
/// [`MIN_AMBIGUOUS_HITS`] of them appear, each near an error-context
/// word.
const AMBIGUOUS_PHRASES: &[&str] = &[
    "forbidden",
    "maintenance mode",
    "captcha",
    "rate limit",
    "temporarily unavailable",
    "not available in your region",
    "service unavailable",
];

/// Words that mark an error context around an ambiguous phrase.
const ERROR_CONTEXT_WORDS: &[&str] = &["error", "blocked", "denied", "cannot", "unable", "restrict"];

/// How close (in characters) a context word must be to an ambiguous
/// phrase to count.
const AMBIGUOUS_CONTEXT_WINDOW: usize = 120;

/// How many contextual ambiguous phrases trigger rejection.
const MIN_AMBIGUOUS_HITS: usize = 2;

/// Betting-domain vocabulary; two distinct terms accept the payload
/// regardless of length or structure.
const BETTING_VOCABULARY: &[&str] = &[
    "bet", "wager", "odds", "casino", "stake", "bookmaker", "sportsbook", "accumulator",
    "jackpot", "in-play", "football", "soccer", "tennis", "basketball", "cricket", "racing",
];

/// Distinct betting terms required for vocabulary-based acceptance.
const MIN_VOCABULARY_TERMS: usize = 2;

/// Structural tag kinds; a real page shows several.
const STRUCTURAL_TAGS: &[&str] = &[
    "<div", "<span", "<p", "<a ", "<ul", "<li", "<nav", "<header", "<footer", "<section",
    "<table", "<img",
];

/// Distinct structural tag kinds required for structure-based acceptance.
const MIN_STRUCTURAL_TAG_KINDS: usize = 3;

/// Minimum payload length for structure-based acceptance.
const MIN_STRUCTURAL_LENGTH: usize = 1000;

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Block phrase detected: '{0}'")]
    BlockPhrase(String),

    #[error("Multiple block indicators in error context: {0:?}")]
    AmbiguousBlock(Vec<String>),

    #[error("Payload has neither betting vocabulary nor page structure")]
    InsufficientContent,
}

/// Screen a relay payload.
///
/// Order matters: hard rejections first, then the contextual ambiguous
/// tier, then acceptance checks. Vocabulary-based acceptance has no
/// length requirement, so short but clearly on-domain pages pass.
pub fn validate_content(payload: &str) -> Result<(), Rejection> {
    let lower = payload.to_lowercase();

    for phrase in HARD_BLOCK_PHRASES {
        if lower.contains(phrase) {
            return Err(Rejection::BlockPhrase((*phrase).to_string()));
        }
    }

    let contextual_hits = contextual_ambiguous_hits(&lower);
    if contextual_hits.len() >= MIN_AMBIGUOUS_HITS {
        return Err(Rejection::AmbiguousBlock(contextual_hits));
    }

    if vocabulary_terms(&lower) >= MIN_VOCABULARY_TERMS {
        return Ok(());
    }

    let has_document_shell = lower.contains("<html") || lower.contains("<body");
    if has_document_shell
        && structural_tag_kinds(&lower) >= MIN_STRUCTURAL_TAG_KINDS
        && payload.len() > MIN_STRUCTURAL_LENGTH
    {
        return Ok(());
    }

    Err(Rejection::InsufficientContent)
}

/// Ambiguous phrases that occur within [`AMBIGUOUS_CONTEXT_WINDOW`]
/// characters of an error-context word.
fn contextual_ambiguous_hits(lower: &str) -> Vec<String> {
    AMBIGUOUS_PHRASES
        .iter()
        .filter(|phrase| {
            lower.match_indices(**phrase).any(|(pos, matched)| {
                let mut start = pos.saturating_sub(AMBIGUOUS_CONTEXT_WINDOW);
                let mut end = (pos + matched.len() + AMBIGUOUS_CONTEXT_WINDOW).min(lower.len());
                // Keep the window on char boundaries for non-ASCII pages.
                while !lower.is_char_boundary(start) {
                    start -= 1;
                }
                while !lower.is_char_boundary(end) {
                    end += 1;
                }
                let window = &lower[start..end];
                ERROR_CONTEXT_WORDS.iter().any(|w| window.contains(w))
            })
        })
        .map(|phrase| (*phrase).to_string())
        .collect()
}

/// Number of distinct betting vocabulary terms present.
fn vocabulary_terms(lower: &str) -> usize {
    BETTING_VOCABULARY
        .iter()
        .filter(|term| lower.contains(**term))
        .count()
}

/// Number of distinct structural tag kinds present.
fn structural_tag_kinds(lower: &str) -> usize {
    STRUCTURAL_TAGS
        .iter()
        .filter(|tag| lower.contains(**tag))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_block_page_regardless_of_length() {
        let payload = "Access Denied - your IP address has been blocked";
        assert!(matches!(
            validate_content(payload),
            Err(Rejection::BlockPhrase(_))
        ));
    }

    #[test]
    fn accepts_betting_vocabulary_regardless_of_length() {
        // Short and structureless, but clearly on-domain.
        assert!(validate_content("Best odds on every bet").is_ok());
        assert!(validate_content("football betting and casino games").is_ok());
    }

    #[test]
    fn rejects_short_payload_without_vocabulary_or_structure() {
        assert!(matches!(
            validate_content("hello world"),
            Err(Rejection::InsufficientContent)
        ));
        assert!(matches!(
            validate_content(""),
            Err(Rejection::InsufficientContent)
        ));
    }

    #[test]
    fn single_ambiguous_phrase_without_context_is_tolerated() {
        // A legitimate page that merely mentions a captcha once.
        let page = format!(
            "<html><body><div><p>Sign up and complete the captcha to verify \
             your account.</p>{}</div><nav></nav><ul><li></li></ul></body></html>",
            "x".repeat(1200)
        );
        assert!(validate_content(&page).is_ok());
    }

    #[test]
    fn multiple_contextual_ambiguous_phrases_reject() {
        let payload = "Error: service temporarily unavailable. \
                       Access restricted - captcha required due to blocked request. \
                       forbidden: cannot continue.";
        assert!(matches!(
            validate_content(payload),
            Err(Rejection::AmbiguousBlock(_))
        ));
    }

    #[test]
    fn accepts_structured_page_over_length_threshold() {
        let page = format!(
            "<html><body><header></header><nav></nav><div><span></span></div>\
             <section><p>{}</p></section></body></html>",
            "content ".repeat(200)
        );
        assert!(validate_content(&page).is_ok());
    }

    #[test]
    fn rejects_structured_page_under_length_threshold() {
        let page = "<html><body><div></div><nav></nav><p></p></body></html>";
        assert!(matches!(
            validate_content(page),
            Err(Rejection::InsufficientContent)
        ));
    }

    #[test]
    fn hard_phrase_beats_vocabulary() {
        // Block page that happens to mention betting terms.
        let payload = "Access denied. Come back later for odds and bets.";
        assert!(matches!(
            validate_content(payload),
            Err(Rejection::BlockPhrase(_))
        ));
    }
}
