//! Domain fingerprint fallback.
//!
//! When scraping fails or yields too little signal, a static table of
//! known operator fingerprints supplies a pre-built theme fragment.
//! Matching is containment-based and tiered (base domain, then full
//! hostname, then raw URL) so `www.`/subdomain variants all hit. The
//! matcher is total: any parseable URL yields a bundle, unknown domains
//! get the generic neutral-blue fallback.

use oddsmith_core::theme::{
    ButtonStyle, ExtractedColors, ExtractedTheme, ExtractedTypography, SidebarPosition,
};
use url::Url;

use crate::error::ExtractError;

/// A known operator's visual fingerprint.
///
/// Hex literals keep their brand-book casing; everything downstream of
/// the synthesizer is normalized to lowercase.
struct Fingerprint {
    needle: &'static str,
    name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    header_bg: &'static str,
    font_family: &'static str,
}

/// Known operator fingerprints. New brands are rows here, not new code.
const FINGERPRINTS: &[Fingerprint] = &[
    Fingerprint {
        needle: "ladbrokes",
        name: "Ladbrokes",
        primary: "#C8102E",
        secondary: "#FDBB30",
        header_bg: "#1A1A1A",
        font_family: "'Roboto Condensed', Arial, sans-serif",
    },
    Fingerprint {
        needle: "bet365",
        name: "bet365",
        primary: "#027B5B",
        secondary: "#FFE100",
        header_bg: "#027B5B",
        font_family: "Arial, Helvetica, sans-serif",
    },
    Fingerprint {
        needle: "williamhill",
        name: "William Hill",
        primary: "#00143E",
        secondary: "#F8D547",
        header_bg: "#00143E",
        font_family: "'Open Sans', Arial, sans-serif",
    },
    Fingerprint {
        needle: "paddypower",
        name: "Paddy Power",
        primary: "#004833",
        secondary: "#8DC63F",
        header_bg: "#004833",
        font_family: "'Proxima Nova', Arial, sans-serif",
    },
    Fingerprint {
        needle: "betfair",
        name: "Betfair",
        primary: "#FFB80C",
        secondary: "#1E1E1E",
        header_bg: "#1E1E1E",
        font_family: "Arial, Helvetica, sans-serif",
    },
    Fingerprint {
        needle: "coral",
        name: "Coral",
        primary: "#0095D8",
        secondary: "#FFD100",
        header_bg: "#003865",
        font_family: "'Lato', Arial, sans-serif",
    },
    Fingerprint {
        needle: "unibet",
        name: "Unibet",
        primary: "#147B45",
        secondary: "#3EC1F3",
        header_bg: "#147B45",
        font_family: "'Montserrat', Arial, sans-serif",
    },
    Fingerprint {
        needle: "betway",
        name: "Betway",
        primary: "#00A826",
        secondary: "#1B1B1B",
        header_bg: "#1B1B1B",
        font_family: "'Poppins', Arial, sans-serif",
    },
    Fingerprint {
        needle: "skybet",
        name: "Sky Bet",
        primary: "#0072C9",
        secondary: "#E0E0E0",
        header_bg: "#002050",
        font_family: "'Sky Text', Arial, sans-serif",
    },
    Fingerprint {
        needle: "888sport",
        name: "888sport",
        primary: "#146F41",
        secondary: "#FF8800",
        header_bg: "#146F41",
        font_family: "'Open Sans', Arial, sans-serif",
    },
    Fingerprint {
        needle: "draftkings",
        name: "DraftKings",
        primary: "#53D337",
        secondary: "#1B2631",
        header_bg: "#1B2631",
        font_family: "'Saira Condensed', Arial, sans-serif",
    },
    Fingerprint {
        needle: "fanduel",
        name: "FanDuel",
        primary: "#1493FF",
        secondary: "#0E3E8A",
        header_bg: "#0E3E8A",
        font_family: "'Proxima Nova', Arial, sans-serif",
    },
];

/// Generic neutral-blue bundle for unrecognized domains.
const GENERIC: Fingerprint = Fingerprint {
    needle: "",
    name: "Generic",
    primary: "#1976d2",
    secondary: "#424242",
    header_bg: "#263238",
    font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
};

/// A resolved pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Display name of the matched operator, or "Generic".
    pub operator: &'static str,
    /// Whether this is the generic fallback rather than a known brand.
    pub generic: bool,
    /// The pre-built theme fragment.
    pub theme: ExtractedTheme,
}

/// Extract the registrable base label from a URL.
///
/// Strips `www.` and takes the second-to-last label when more than two
/// labels remain (`sports.ladbrokes.com` -> `ladbrokes`). Best-effort:
/// multi-part public suffixes (`.co.uk`) are not special-cased; the
/// hostname and raw-URL matching tiers cover those.
pub fn base_domain(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    match labels.len() {
        0 => None,
        1 | 2 => Some(labels[0].to_string()),
        n => Some(labels[n - 2].to_string()),
    }
}

/// Match a URL against the fingerprint table.
///
/// Total for parseable URLs: unknown domains return the generic bundle.
/// The only failure case is an unparsable URL.
pub fn match_domain(raw_url: &str) -> Result<PatternMatch, ExtractError> {
    let url = Url::parse(raw_url).map_err(|_| ExtractError::InvalidUrl(raw_url.to_string()))?;

    let base = base_domain(&url).unwrap_or_default();
    let host = url.host_str().unwrap_or_default().to_lowercase();
    let raw_lower = raw_url.to_lowercase();

    // Tiered containment: base domain beats hostname beats raw URL.
    for haystack in [&base.to_lowercase(), &host, &raw_lower] {
        for fp in FINGERPRINTS {
            if haystack.contains(fp.needle) {
                return Ok(PatternMatch {
                    operator: fp.name,
                    generic: false,
                    theme: build_theme(fp),
                });
            }
        }
    }

    Ok(PatternMatch {
        operator: GENERIC.name,
        generic: true,
        theme: build_theme(&GENERIC),
    })
}

fn build_theme(fp: &Fingerprint) -> ExtractedTheme {
    ExtractedTheme {
        colors: ExtractedColors {
            primary: Some(fp.primary.to_string()),
            secondary: Some(fp.secondary.to_string()),
            header_bg: Some(fp.header_bg.to_string()),
            ..Default::default()
        },
        typography: ExtractedTypography {
            font_family: Some(fp.font_family.to_string()),
            heading_font: None,
        },
        layout: oddsmith_core::theme::ExtractedLayout {
            border_radius: None,
            spacing: None,
            sidebar_position: Some(SidebarPosition::Left),
        },
        components: oddsmith_core::theme::ExtractedComponents {
            button_style: Some(ButtonStyle::Rounded),
            card_shadow: None,
        },
        images: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_brand_matches_with_www_prefix() {
        let m = match_domain("https://www.ladbrokes.com/sports").unwrap();
        assert_eq!(m.operator, "Ladbrokes");
        assert!(!m.generic);
        assert_eq!(m.theme.colors.primary.as_deref(), Some("#C8102E"));
    }

    #[test]
    fn known_brand_matches_on_subdomain() {
        let m = match_domain("https://sports.bet365.com/home").unwrap();
        assert_eq!(m.operator, "bet365");
        assert_eq!(m.theme.colors.primary.as_deref(), Some("#027B5B"));
    }

    #[test]
    fn unknown_domain_gets_generic_bundle() {
        let m = match_domain("https://www.some-random-unknown-site.example/").unwrap();
        assert!(m.generic);
        assert_eq!(m.theme.colors.primary.as_deref(), Some("#1976d2"));
    }

    #[test]
    fn matcher_is_total_for_parseable_urls() {
        for url in [
            "https://a.example",
            "http://localhost:8080/x",
            "https://betfair.co.uk/exchange",
            "https://127.0.0.1/",
        ] {
            let m = match_domain(url).unwrap();
            assert!(m.theme.colors.primary.is_some(), "no bundle for {url}");
        }
    }

    #[test]
    fn multi_part_suffix_hits_via_hostname_tier() {
        // base_domain() gives "co" here; the hostname tier still matches.
        let m = match_domain("https://www.ladbrokes.co.uk/sports").unwrap();
        assert_eq!(m.operator, "Ladbrokes");
    }

    #[test]
    fn malformed_url_is_the_only_error() {
        assert!(matches!(
            match_domain("not a url at all"),
            Err(ExtractError::InvalidUrl(_))
        ));
    }

    #[test]
    fn base_domain_strips_www_and_subdomains() {
        let u = |s: &str| Url::parse(s).unwrap();
        assert_eq!(base_domain(&u("https://www.ladbrokes.com/")).as_deref(), Some("ladbrokes"));
        assert_eq!(base_domain(&u("https://sports.ladbrokes.com/")).as_deref(), Some("ladbrokes"));
        assert_eq!(base_domain(&u("https://ladbrokes.com/")).as_deref(), Some("ladbrokes"));
    }
}
