//! Heuristic inference of an [`ExtractedTheme`] from raw HTML.
//!
//! No DOM is built: sites behind CORS relays arrive as plain text, and
//! frequency statistics over regex-harvested declarations are as much
//! signal as a block of third-party markup reliably yields. Fields
//! without signal stay absent; guessing is the synthesizer's job, not
//! the engine's.

use std::collections::HashMap;
use std::sync::LazyLock;

use oddsmith_core::color::{
    color_distance, dominant_family, is_dark, is_neutral, is_vibrant, normalize_color, ColorFamily,
};
use oddsmith_core::theme::{
    ButtonStyle, CardShadow, ExtractedColors, ExtractedComponents, ExtractedImages,
    ExtractedLayout, ExtractedTheme, ExtractedTypography, SidebarPosition, SpacingDensity,
};
use regex::Regex;
use url::Url;

/// Minimum occurrences for a color to count as significant.
///
/// Filters one-off decorative colors. Fixed magic number inherited from
/// the platform's tuning; kept configurable rather than re-derived.
pub const MIN_COLOR_OCCURRENCES: usize = 3;

/// Minimum RGB distance between primary and secondary so the pair stays
/// visually distinct.
pub const SECONDARY_DISTANCE_THRESHOLD: f64 = 100.0;

/// Spacing magnitudes below this average classify as compact.
pub const COMPACT_SPACING_MAX: f64 = 12.0;

/// Spacing magnitudes above this average classify as spacious.
pub const SPACIOUS_SPACING_MIN: f64 = 20.0;

/// Button radii at or above this many pixels read as pill-shaped.
pub const PILL_RADIUS_MIN: f64 = 20.0;

static STYLE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").unwrap());
static INLINE_STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)style\s*=\s*["']([^"']*)["']"#).unwrap());
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").unwrap());
static FUNC_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:rgba?|hsla?)\([^)]*\)").unwrap());
static CUSTOM_PROP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)--[a-z0-9-]+\s*:\s*([^;}]+)").unwrap());
static FONT_FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)font-family\s*:\s*([^;"'}<]+)"#).unwrap());
static BORDER_RADIUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)border-radius\s*:\s*(\d+(?:\.\d+)?)px").unwrap());
static SPACING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:padding|margin)(?:-(?:top|right|bottom|left))?\s*:\s*(\d+(?:\.\d+)?)px")
        .unwrap()
});
static BOX_SHADOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)box-shadow\s*:\s*([^;}]+)").unwrap());
static IMG_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());
/// Elements whose inline background color overrides frequency evidence:
/// brand/CTA class names and structurally prominent tags.
static BRAND_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<(?:nav|header|button|\w+\s[^>]*class\s*=\s*["'][^"']*(?:brand|primary|cta|btn-primary)[^"']*["'])[^>]*style\s*=\s*["'][^"']*background(?:-color)?\s*:\s*([^;"']+)"#,
    )
    .unwrap()
});
static BUTTON_RULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:button|\.btn[\w-]*)[^{}]*\{[^}]*border-radius\s*:\s*(\d+(?:\.\d+)?)px")
        .unwrap()
});
static SIDEBAR_RIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:sidebar-right|right-sidebar)").unwrap());

/// Supported font stacks; the first detected family maps onto one of
/// these, anything else falls through to the synthesizer's default.
const FONT_STACKS: &[(&str, &str)] = &[
    ("inter", "'Inter', sans-serif"),
    ("roboto condensed", "'Roboto Condensed', Arial, sans-serif"),
    ("roboto", "'Roboto', sans-serif"),
    ("open sans", "'Open Sans', Arial, sans-serif"),
    ("lato", "'Lato', Arial, sans-serif"),
    ("montserrat", "'Montserrat', Arial, sans-serif"),
    ("poppins", "'Poppins', Arial, sans-serif"),
    ("oswald", "'Oswald', Arial, sans-serif"),
    ("source sans", "'Source Sans 3', Arial, sans-serif"),
    ("arial", "Arial, Helvetica, sans-serif"),
    ("helvetica", "Helvetica, Arial, sans-serif"),
    ("georgia", "Georgia, 'Times New Roman', serif"),
    ("times", "'Times New Roman', Georgia, serif"),
];

/// Border-radius tiers a modal value snaps to.
const RADIUS_TIERS: &[(f64, &str)] = &[(0.0, "0px"), (4.0, "4px"), (10.0, "8px")];
const RADIUS_TIER_MAX: &str = "16px";

/// Where the engine found the primary color; surfaced in debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimarySource {
    /// A prominent brand/CTA element's inline background.
    Element,
    /// Dominant hue-family frequency ranking.
    FamilyFrequency,
    /// Most vibrant non-neutral fallback.
    Vibrancy,
    /// Most frequent non-neutral fallback.
    Frequency,
}

impl PrimarySource {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimarySource::Element => "element",
            PrimarySource::FamilyFrequency => "family-frequency",
            PrimarySource::Vibrancy => "vibrancy",
            PrimarySource::Frequency => "frequency",
        }
    }
}

/// What the engine inferred, plus the statistics behind it.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub theme: ExtractedTheme,
    /// Distinct normalized colors harvested from the page.
    pub colors_found: usize,
    /// Which heuristic chose the primary color, if one was chosen.
    pub primary_source: Option<PrimarySource>,
}

/// Run the full inference over raw HTML.
///
/// `source_url` is used to resolve relative logo/banner paths; it is
/// never fetched.
pub fn extract(html: &str, source_url: &str) -> EngineOutput {
    let frequencies = harvest_colors(html);
    let colors_found = frequencies.len();

    let (colors, primary_source) = assign_color_roles(html, &frequencies);
    let typography = detect_typography(html);
    let layout = detect_layout(html);
    let components = detect_components(html);
    let images = detect_images(html, source_url);

    EngineOutput {
        theme: ExtractedTheme {
            colors,
            typography,
            layout,
            components,
            images,
        },
        colors_found,
        primary_source,
    }
}

// ---------------------------------------------------------------------------
// Color harvesting
// ---------------------------------------------------------------------------

/// Collect all color literals, normalized to lowercase 6-digit hex,
/// with occurrence counts.
///
/// Sources in order: `<style>` block contents, inline `style`
/// attributes (which also covers custom-property declarations on the
/// root element), then the full markup as a last resort when the
/// targeted sources had nothing.
fn harvest_colors(html: &str) -> HashMap<String, usize> {
    let mut frequencies: HashMap<String, usize> = HashMap::new();

    let mut count_in = |text: &str, frequencies: &mut HashMap<String, usize>| {
        for m in HEX_COLOR_RE.find_iter(text) {
            if let Some(hex) = normalize_color(m.as_str()) {
                *frequencies.entry(hex).or_default() += 1;
            }
        }
        for m in FUNC_COLOR_RE.find_iter(text) {
            if let Some(hex) = normalize_color(m.as_str()) {
                *frequencies.entry(hex).or_default() += 1;
            }
        }
    };

    for caps in STYLE_BLOCK_RE.captures_iter(html) {
        count_in(&caps[1], &mut frequencies);
    }
    for caps in INLINE_STYLE_RE.captures_iter(html) {
        count_in(&caps[1], &mut frequencies);
        for prop in CUSTOM_PROP_RE.captures_iter(&caps[1]) {
            count_in(&prop[1], &mut frequencies);
        }
    }

    if frequencies.is_empty() {
        count_in(html, &mut frequencies);
    }

    frequencies
}

/// A significant color: non-neutral and frequent enough to matter.
fn significant_colors(frequencies: &HashMap<String, usize>) -> Vec<(&String, usize)> {
    let mut colors: Vec<(&String, usize)> = frequencies
        .iter()
        .filter(|(hex, &count)| count >= MIN_COLOR_OCCURRENCES && !is_neutral(hex))
        .map(|(hex, &count)| (hex, count))
        .collect();
    // Deterministic ordering: frequency, then hex as tiebreak.
    colors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    colors
}

/// Frequency-based primary selection: dominant hue family first, then
/// vibrancy, then raw frequency.
fn pick_primary(significant: &[(&String, usize)]) -> Option<(String, PrimarySource)> {
    let mut family_totals: HashMap<ColorFamily, usize> = HashMap::new();
    let mut family_members: HashMap<ColorFamily, Vec<(&str, usize)>> = HashMap::new();

    for &(hex, count) in significant {
        if let Some(family) = dominant_family(hex) {
            *family_totals.entry(family).or_default() += count;
            family_members
                .entry(family)
                .or_default()
                .push((hex.as_str(), count));
        }
    }

    if let Some((&family, _)) = family_totals
        .iter()
        .max_by_key(|&(&family, &total)| (total, family_rank(family)))
    {
        let top = family_members[&family]
            .iter()
            .max_by(|a, b| {
                (is_vibrant(a.0), a.1, std::cmp::Reverse(a.0))
                    .cmp(&(is_vibrant(b.0), b.1, std::cmp::Reverse(b.0)))
            })
            .map(|&(hex, _)| hex.to_string());
        if let Some(hex) = top {
            return Some((hex, PrimarySource::FamilyFrequency));
        }
    }

    if let Some((hex, _)) = significant.iter().find(|(hex, _)| is_vibrant(hex)) {
        return Some(((*hex).clone(), PrimarySource::Vibrancy));
    }

    significant
        .first()
        .map(|(hex, _)| ((*hex).clone(), PrimarySource::Frequency))
}

/// Stable tiebreak for equally-frequent families.
fn family_rank(family: ColorFamily) -> u8 {
    match family {
        ColorFamily::Red => 2,
        ColorFamily::Green => 1,
        ColorFamily::Blue => 0,
    }
}

/// Inline background of a brand/CTA-like element, if strongly colored.
///
/// A visually prominent, semantically significant element is stronger
/// evidence than raw frequency, so this overrides [`pick_primary`].
fn element_override(html: &str) -> Option<String> {
    for caps in BRAND_ELEMENT_RE.captures_iter(html) {
        if let Some(hex) = normalize_color(caps[1].trim()) {
            if dominant_family(&hex).is_some() {
                return Some(hex);
            }
        }
    }
    None
}

fn assign_color_roles(
    html: &str,
    frequencies: &HashMap<String, usize>,
) -> (ExtractedColors, Option<PrimarySource>) {
    let significant = significant_colors(frequencies);

    let (primary, primary_source) = match element_override(html) {
        Some(hex) => (Some(hex), Some(PrimarySource::Element)),
        None => match pick_primary(&significant) {
            Some((hex, source)) => (Some(hex), Some(source)),
            None => (None, None),
        },
    };

    // Header: most frequent dark color other than primary, else the
    // primary itself when it is dark. Anything further is a default the
    // synthesizer owns.
    let header_bg = significant
        .iter()
        .find(|(hex, _)| is_dark(hex) && Some(hex.as_str()) != primary.as_deref())
        .map(|(hex, _)| (*hex).clone())
        .or_else(|| primary.clone().filter(|p| is_dark(p)));

    let secondary = primary.as_ref().and_then(|primary| {
        significant
            .iter()
            .find(|(hex, _)| color_distance(hex, primary) > SECONDARY_DISTANCE_THRESHOLD)
            .map(|(hex, _)| (*hex).clone())
    });

    // Background: a non-white light color when the page actually uses
    // one; plain white is left to the defaults table.
    let background = {
        let mut light: Vec<(&String, usize)> = frequencies
            .iter()
            .filter(|(hex, &count)| {
                count >= MIN_COLOR_OCCURRENCES
                    && hex.as_str() != "#ffffff"
                    && !is_dark(hex)
                    && is_neutral(hex)
            })
            .map(|(hex, &count)| (hex, count))
            .collect();
        light.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        light.first().map(|(hex, _)| (*hex).clone())
    };

    (
        ExtractedColors {
            primary,
            secondary,
            header_bg,
            header_text: None,
            nav_bg: None,
            background,
            surface: None,
            text: None,
            border: None,
        },
        primary_source,
    )
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

fn detect_typography(html: &str) -> ExtractedTypography {
    let font_family = FONT_FAMILY_RE
        .captures_iter(html)
        .find_map(|caps| map_font_stack(caps[1].trim()));

    ExtractedTypography {
        font_family,
        heading_font: None,
    }
}

/// Map a raw `font-family` value onto the supported stacks.
fn map_font_stack(declared: &str) -> Option<String> {
    let lower = declared.to_lowercase();
    FONT_STACKS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, stack)| (*stack).to_string())
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

fn detect_layout(html: &str) -> ExtractedLayout {
    ExtractedLayout {
        border_radius: detect_border_radius(html),
        spacing: detect_spacing(html),
        sidebar_position: detect_sidebar(html),
    }
}

/// Modal border-radius value, snapped to a fixed tier.
fn detect_border_radius(html: &str) -> Option<String> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for caps in BORDER_RADIUS_RE.captures_iter(html) {
        if let Ok(px) = caps[1].parse::<f64>() {
            *counts.entry(px.round() as u32).or_default() += 1;
        }
    }

    let (modal, _) = counts
        .into_iter()
        .max_by_key(|&(px, count)| (count, std::cmp::Reverse(px)))?;

    let modal = f64::from(modal);
    let tier = RADIUS_TIERS
        .iter()
        .find(|(max, _)| modal <= *max)
        .map(|(_, tier)| *tier)
        .unwrap_or(RADIUS_TIER_MAX);
    Some(tier.to_string())
}

/// Average padding/margin magnitude, bucketed into a density.
fn detect_spacing(html: &str) -> Option<SpacingDensity> {
    let values: Vec<f64> = SPACING_RE
        .captures_iter(html)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .collect();
    if values.is_empty() {
        return None;
    }

    let average = values.iter().sum::<f64>() / values.len() as f64;
    Some(if average < COMPACT_SPACING_MAX {
        SpacingDensity::Compact
    } else if average > SPACIOUS_SPACING_MIN {
        SpacingDensity::Spacious
    } else {
        SpacingDensity::Normal
    })
}

/// Sidebar side from class-name hints; absent when nothing hints.
fn detect_sidebar(html: &str) -> Option<SidebarPosition> {
    if SIDEBAR_RIGHT_RE.is_match(html) {
        Some(SidebarPosition::Right)
    } else if html.to_lowercase().contains("sidebar") {
        Some(SidebarPosition::Left)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

fn detect_components(html: &str) -> ExtractedComponents {
    ExtractedComponents {
        button_style: detect_button_style(html),
        card_shadow: detect_card_shadow(html),
    }
}

/// Majority vote over border-radius hints on button-like rules.
fn detect_button_style(html: &str) -> Option<ButtonStyle> {
    let mut pill = 0usize;
    let mut square = 0usize;
    let mut rounded = 0usize;

    for caps in BUTTON_RULE_RE.captures_iter(html) {
        match caps[1].parse::<f64>() {
            Ok(px) if px >= PILL_RADIUS_MIN => pill += 1,
            Ok(px) if px == 0.0 => square += 1,
            Ok(_) => rounded += 1,
            Err(_) => {}
        }
    }

    if pill + square + rounded == 0 {
        return None;
    }
    Some(if pill >= square && pill >= rounded {
        ButtonStyle::Pill
    } else if square > rounded {
        ButtonStyle::Square
    } else {
        ButtonStyle::Rounded
    })
}

/// Card shadow tier from the average blur radius of `box-shadow`
/// declarations; a page with zero shadows is flat by evidence, not by
/// absence of signal.
fn detect_card_shadow(html: &str) -> Option<CardShadow> {
    let mut blurs: Vec<f64> = Vec::new();
    for caps in BOX_SHADOW_RE.captures_iter(html) {
        blurs.push(shadow_blur(&caps[1]));
    }

    if blurs.is_empty() {
        return Some(CardShadow::None);
    }

    let average = blurs.iter().sum::<f64>() / blurs.len() as f64;
    Some(if average == 0.0 {
        CardShadow::None
    } else if average < 4.0 {
        CardShadow::Sm
    } else if average < 10.0 {
        CardShadow::Md
    } else {
        CardShadow::Lg
    })
}

/// Blur radius (third length) of a box-shadow value, 0 when absent.
fn shadow_blur(value: &str) -> f64 {
    value
        .split_whitespace()
        .filter_map(|token| token.trim_end_matches("px").parse::<f64>().ok())
        .nth(2)
        .unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

fn detect_images(html: &str, source_url: &str) -> ExtractedImages {
    let base = Url::parse(source_url).ok();

    let mut logo: Option<(u8, String)> = None;
    let mut banner: Option<String> = None;

    for m in IMG_TAG_RE.find_iter(html) {
        let tag = m.as_str();
        let lower = tag.to_lowercase();
        let Some(src) = img_attr(tag, "src") else {
            continue;
        };

        let mentions_logo = lower.contains("logo");
        let mentions_banner = lower.contains("banner") || lower.contains("hero");

        if mentions_logo {
            // Prefer logos that sit inside header/logo containers.
            let context_start = m.start().saturating_sub(300);
            let mut start = context_start;
            while !html.is_char_boundary(start) {
                start -= 1;
            }
            let context = html[start..m.start()].to_lowercase();
            let score = if context.contains("<header") || context.contains("logo") {
                2
            } else {
                1
            };
            if logo.as_ref().map_or(true, |(best, _)| score > *best) {
                logo = Some((score, src.clone()));
            }
        }

        if mentions_banner && banner.is_none() {
            banner = Some(src);
        }
    }

    let resolve = |path: String| -> Option<String> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path);
        }
        base.as_ref()
            .and_then(|b| b.join(&path).ok())
            .map(|resolved| resolved.to_string())
    };

    ExtractedImages {
        logo_url: logo.map(|(_, src)| src).and_then(resolve),
        banner_url: banner.and_then(resolve),
    }
}

/// Pull a single attribute value out of an `<img>` tag.
fn img_attr(tag: &str, attr: &str) -> Option<String> {
    let re = Regex::new(&format!(r#"(?i){attr}\s*=\s*["']([^"']*)["']"#)).ok()?;
    re.captures(tag).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "https://www.example-sportsbook.com/sports";

    fn style_page(css: &str) -> String {
        format!("<html><head><style>{css}</style></head><body><div></div></body></html>")
    }

    #[test]
    fn harvests_and_normalizes_all_color_notations() {
        let html = style_page(
            ".a { color: #C8102E; } .b { background: rgb(200, 16, 46); } \
             .c { border-color: #c8102e; } .d { color: hsl(0, 100%, 50%); }",
        );
        let freq = harvest_colors(&html);
        assert_eq!(freq.get("#c8102e"), Some(&3));
        assert_eq!(freq.get("#ff0000"), Some(&1));
    }

    #[test]
    fn inline_styles_and_custom_properties_are_harvested() {
        let html = r##"<html style="--brand-primary: #1976d2; --x: #1976d2">
            <div style="background: #1976d2"></div></html>"##;
        let freq = harvest_colors(html);
        // Inline attr scan counts the literals; the custom-property scan
        // re-counts declarations inside the root style attribute.
        assert!(freq.get("#1976d2").copied().unwrap_or(0) >= 3);
    }

    #[test]
    fn markup_fallback_when_no_styles_present() {
        let html = r##"<html><body><font color="#00a826">win</font> #00a826 #00a826</body></html>"##;
        let freq = harvest_colors(html);
        assert_eq!(freq.get("#00a826"), Some(&3));
    }

    #[test]
    fn infrequent_colors_are_not_significant() {
        let html = style_page(".a { color: #c8102e; } .b { color: #123456; }");
        let freq = harvest_colors(&html);
        assert!(significant_colors(&freq).is_empty());
    }

    #[test]
    fn dominant_family_wins_primary() {
        // Red family: 4 occurrences; blue family: 3.
        let html = style_page(
            ".a { color: #c8102e; } .b { color: #c8102e; } .c { color: #c8102e; }
             .d { color: #c8102e; } .e { color: #1976d2; } .f { color: #1976d2; }
             .g { color: #1976d2; }",
        );
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.colors.primary.as_deref(), Some("#c8102e"));
        assert_eq!(out.primary_source, Some(PrimarySource::FamilyFrequency));
    }

    #[test]
    fn element_background_overrides_frequency() {
        let html = r##"<html><head><style>
            .x { color: #1976d2; } .y { color: #1976d2; } .z { color: #1976d2; }
            </style></head>
            <body><button class="btn-primary" style="background-color: #c8102e">Bet Now</button>
            </body></html>"##;
        let out = extract(html, SOURCE);
        assert_eq!(out.theme.colors.primary.as_deref(), Some("#c8102e"));
        assert_eq!(out.primary_source, Some(PrimarySource::Element));
    }

    #[test]
    fn neutral_element_background_does_not_override() {
        let html = r##"<html><head><style>
            .x { color: #1976d2; } .y { color: #1976d2; } .z { color: #1976d2; }
            </style></head>
            <body><header style="background: #ffffff"></header></body></html>"##;
        let out = extract(html, SOURCE);
        assert_eq!(out.theme.colors.primary.as_deref(), Some("#1976d2"));
    }

    #[test]
    fn secondary_must_be_distant_from_primary() {
        // #1976d2 and #1565c0 are close; #ffb80c is far.
        let html = style_page(
            ".a { color: #1976d2; } .b { color: #1976d2; } .c { color: #1976d2; }
             .d { color: #1565c0; } .e { color: #1565c0; } .f { color: #1565c0; }
             .g { color: #ffb80c; } .h { color: #ffb80c; } .i { color: #ffb80c; }",
        );
        let out = extract(&html, SOURCE);
        let secondary = out.theme.colors.secondary.unwrap();
        let primary = out.theme.colors.primary.unwrap();
        assert!(color_distance(&secondary, &primary) > SECONDARY_DISTANCE_THRESHOLD);
    }

    #[test]
    fn dark_non_primary_becomes_header() {
        let html = style_page(
            ".a { color: #1976d2; } .b { color: #1976d2; } .c { color: #1976d2; }
             .h { background: #1a2640; } .i { background: #1a2640; } .j { background: #1a2640; }",
        );
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.colors.header_bg.as_deref(), Some("#1a2640"));
    }

    #[test]
    fn light_gray_background_is_detected() {
        let html = style_page(
            ".p { color: #c8102e; } .q { color: #c8102e; } .r { color: #c8102e; }
             body { background: #f4f5f7; } .s { background: #f4f5f7; } .t { background: #f4f5f7; }",
        );
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.colors.background.as_deref(), Some("#f4f5f7"));
    }

    #[test]
    fn typography_maps_onto_supported_stack() {
        let html = style_page("body { font-family: Montserrat, sans-serif; }");
        let out = extract(&html, SOURCE);
        assert_eq!(
            out.theme.typography.font_family.as_deref(),
            Some("'Montserrat', Arial, sans-serif")
        );
    }

    #[test]
    fn unknown_font_yields_no_signal() {
        let html = style_page("body { font-family: ZoomyDisplay; }");
        let out = extract(&html, SOURCE);
        assert!(out.theme.typography.font_family.is_none());
    }

    #[test]
    fn border_radius_takes_modal_value_tiered() {
        let html = style_page(
            ".a { border-radius: 8px; } .b { border-radius: 8px; } .c { border-radius: 2px; }",
        );
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.layout.border_radius.as_deref(), Some("8px"));
    }

    #[test]
    fn spacing_density_buckets_on_average() {
        let compact = style_page(".a { padding: 4px; margin: 6px; padding-top: 8px; }");
        assert_eq!(
            extract(&compact, SOURCE).theme.layout.spacing,
            Some(SpacingDensity::Compact)
        );

        let spacious = style_page(".a { padding: 32px; margin: 24px; }");
        assert_eq!(
            extract(&spacious, SOURCE).theme.layout.spacing,
            Some(SpacingDensity::Spacious)
        );
    }

    #[test]
    fn sidebar_hints() {
        let right = r#"<html><body><aside class="sidebar-right"></aside></body></html>"#;
        assert_eq!(
            extract(right, SOURCE).theme.layout.sidebar_position,
            Some(SidebarPosition::Right)
        );

        let left = r#"<html><body><aside class="sidebar"></aside></body></html>"#;
        assert_eq!(
            extract(left, SOURCE).theme.layout.sidebar_position,
            Some(SidebarPosition::Left)
        );

        let none = "<html><body></body></html>";
        assert_eq!(extract(none, SOURCE).theme.layout.sidebar_position, None);
    }

    #[test]
    fn pill_buttons_by_majority_vote() {
        let html = style_page(
            ".btn { border-radius: 24px; } .btn-primary { border-radius: 999px; }
             button { border-radius: 4px; }",
        );
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.components.button_style, Some(ButtonStyle::Pill));
    }

    #[test]
    fn shadowless_page_reads_as_flat() {
        let html = style_page(".card { border: 1px solid #eee; }");
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.components.card_shadow, Some(CardShadow::None));
    }

    #[test]
    fn card_shadow_tier_from_average_blur() {
        let html = style_page(
            ".card { box-shadow: 0 2px 12px rgba(0,0,0,0.2); }
             .modal { box-shadow: 0 4px 16px rgba(0,0,0,0.3); }",
        );
        let out = extract(&html, SOURCE);
        assert_eq!(out.theme.components.card_shadow, Some(CardShadow::Lg));
    }

    #[test]
    fn logo_in_header_is_preferred_and_relative_urls_resolve() {
        let html = r#"<html><body>
            <div><img src="/promo/logo-partner.png" alt="partner logo"></div>
            <header><img src="/assets/logo.svg" alt="Site logo" class="site-logo"></header>
            </body></html>"#;
        let out = extract(html, SOURCE);
        assert_eq!(
            out.theme.images.logo_url.as_deref(),
            Some("https://www.example-sportsbook.com/assets/logo.svg")
        );
    }

    #[test]
    fn banner_detection() {
        let html = r#"<html><body>
            <img class="hero-banner" src="https://cdn.example.com/banner.jpg">
            </body></html>"#;
        let out = extract(html, SOURCE);
        assert_eq!(
            out.theme.images.banner_url.as_deref(),
            Some("https://cdn.example.com/banner.jpg")
        );
    }

    #[test]
    fn empty_page_yields_empty_theme() {
        let out = extract("<html><body>Hello</body></html>", SOURCE);
        assert!(!out.theme.has_color_signal());
        assert!(!out.theme.has_typography_signal());
        assert_eq!(out.colors_found, 0);
    }
}
