//! Heuristic color classification used by the extraction engine.
//!
//! Predicates here are intentionally coarse: they rank candidate brand
//! colors scraped from arbitrary markup, where "roughly red" is all the
//! signal we can hope for.

use super::convert::{hex_to_rgb, luminance, Rgb};

/// Exact neutral literals that never count as brand colors.
///
/// Pure white/black plus the grays that appear on effectively every
/// page (dividers, disabled text, scaffold backgrounds).
const NEUTRAL_SET: &[&str] = &[
    "#ffffff", "#000000", "#fafafa", "#f5f5f5", "#f0f0f0", "#eeeeee", "#e0e0e0", "#dddddd",
    "#cccccc", "#bbbbbb", "#aaaaaa", "#999999", "#888888", "#777777", "#666666", "#555555",
    "#444444", "#333333", "#222222", "#111111",
];

/// Maximum channel spread for a color to be considered a gray.
const GRAY_CHANNEL_SPREAD: u8 = 16;

/// Hue families used for brand-color scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Red,
    Green,
    Blue,
}

/// Channel-dominance predicates per family.
///
/// New families are added here, not as branches in the engine.
pub const FAMILIES: &[(ColorFamily, fn(Rgb) -> bool)] = &[
    (ColorFamily::Red, |c| c.r > 150 && c.g < 100 && c.b < 100),
    (ColorFamily::Green, |c| c.g > 150 && c.r < 100 && c.b < 100),
    (ColorFamily::Blue, |c| c.b > 150 && c.r < 100 && c.g < 130),
];

/// Whether a normalized hex color is a neutral (white/black/gray).
pub fn is_neutral(hex: &str) -> bool {
    if NEUTRAL_SET.contains(&hex) {
        return true;
    }
    match hex_to_rgb(hex) {
        Some(rgb) => {
            let max = rgb.r.max(rgb.g).max(rgb.b);
            let min = rgb.r.min(rgb.g).min(rgb.b);
            max - min < GRAY_CHANNEL_SPREAD
        }
        None => false,
    }
}

/// Whether a color reads as dark (luminance at or below 0.5).
pub fn is_dark(hex: &str) -> bool {
    hex_to_rgb(hex).is_some_and(|rgb| luminance(rgb) <= 0.5)
}

/// Whether a color is saturated enough to be a plausible brand color.
///
/// Saturation above 0.5 with at least one strong channel.
pub fn is_vibrant(hex: &str) -> bool {
    let Some(rgb) = hex_to_rgb(hex) else {
        return false;
    };
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    if max == 0 {
        return false;
    }
    let saturation = f64::from(max - min) / f64::from(max);
    saturation > 0.5 && max > 100
}

/// Euclidean distance between two colors in RGB space.
///
/// Unparseable input yields 0.0 (indistinguishable), which keeps it out
/// of secondary-color selection.
pub fn color_distance(a: &str, b: &str) -> f64 {
    match (hex_to_rgb(a), hex_to_rgb(b)) {
        (Some(a), Some(b)) => {
            let dr = f64::from(a.r) - f64::from(b.r);
            let dg = f64::from(a.g) - f64::from(b.g);
            let db = f64::from(a.b) - f64::from(b.b);
            (dr * dr + dg * dg + db * db).sqrt()
        }
        _ => 0.0,
    }
}

/// The hue family a color belongs to, if any.
pub fn dominant_family(hex: &str) -> Option<ColorFamily> {
    let rgb = hex_to_rgb(hex)?;
    FAMILIES
        .iter()
        .find(|(_, predicate)| predicate(rgb))
        .map(|(family, _)| *family)
}
