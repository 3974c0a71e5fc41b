//! Theme synthesis: partial or minimal input to a complete theme.
//!
//! Both entry points are pure and idempotent; every fallback constant
//! lives in the [`defaults`] table so derivation rules stay auditable.

use crate::color::{contrast_text, darken, is_dark, lighten, normalize_color};
use crate::error::CoreError;
use crate::theme::model::{
    ExtractedTheme, OperatorTheme, SimpleThemeColors, ThemeColors, ThemeComponents, ThemeLayout,
    ThemeTypography,
};

/// Every fixed fallback the synthesizer can reach for.
pub mod defaults {
    /// Primary brand color when nothing better is known (neutral blue).
    pub const PRIMARY: &str = "#1976d2";
    /// Header background when neither an extracted header color nor a
    /// dark primary is available.
    pub const HEADER_BG: &str = "#2b2b2b";
    pub const BACKGROUND: &str = "#ffffff";
    pub const SURFACE: &str = "#f5f5f5";
    pub const BORDER: &str = "#e0e0e0";
    pub const TEXT: &str = "#1a1a1a";
    pub const TEXT_MUTED: &str = "#666666";
    /// Status colors are never inferred from a page.
    pub const SUCCESS: &str = "#2e7d32";
    pub const WARNING: &str = "#ed6c02";
    pub const ERROR: &str = "#d32f2f";
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    pub const BORDER_RADIUS: &str = "8px";
    /// Hover variants darken their base color by this much.
    pub const HOVER_DARKEN_PERCENT: f64 = 10.0;
    /// Nav hover lightens the nav background by this much.
    pub const NAV_LIGHTEN_PERCENT: f64 = 10.0;
    /// Secondary falls back to the primary lightened by this much.
    pub const SECONDARY_LIGHTEN_PERCENT: f64 = 20.0;
    /// Odds hover backgrounds are a heavy tint of the primary.
    pub const ODDS_HOVER_LIGHTEN_PERCENT: f64 = 80.0;
    /// Slip headers are a slight tint of the page background.
    pub const SLIP_HEADER_LIGHTEN_PERCENT: f64 = 10.0;
}

/// The built-in default theme every new brand starts from.
pub fn default_theme() -> OperatorTheme {
    let mut theme = from_extracted(&ExtractedTheme::default());
    theme.id = "default".to_string();
    theme.name = "Default".to_string();
    theme
}

/// Expand an [`ExtractedTheme`] into a complete [`OperatorTheme`].
///
/// Extracted fields win where present; everything else derives from the
/// primary color or falls back to the [`defaults`] table. Unparseable
/// extracted values are discarded rather than propagated, so the output
/// always satisfies the theme invariants.
pub fn from_extracted(extracted: &ExtractedTheme) -> OperatorTheme {
    let c = &extracted.colors;

    let primary = clean(&c.primary).unwrap_or_else(|| defaults::PRIMARY.to_string());

    let header_bg = clean(&c.header_bg).unwrap_or_else(|| {
        if is_dark(&primary) {
            primary.clone()
        } else {
            defaults::HEADER_BG.to_string()
        }
    });
    let header_text = clean(&c.header_text).unwrap_or_else(|| contrast_text(&header_bg).to_string());

    let nav_bg = clean(&c.nav_bg).unwrap_or_else(|| header_bg.clone());
    let secondary = clean(&c.secondary)
        .unwrap_or_else(|| lighten(&primary, defaults::SECONDARY_LIGHTEN_PERCENT));

    let background = clean(&c.background).unwrap_or_else(|| defaults::BACKGROUND.to_string());
    let surface = clean(&c.surface).unwrap_or_else(|| defaults::SURFACE.to_string());
    let border = clean(&c.border).unwrap_or_else(|| defaults::BORDER.to_string());
    let text = clean(&c.text).unwrap_or_else(|| defaults::TEXT.to_string());

    let colors = derive_colors(DerivationInput {
        primary,
        secondary,
        header_bg,
        header_text,
        nav_bg,
        background,
        surface,
        border,
        text,
    });

    OperatorTheme {
        id: "draft".to_string(),
        name: "Extracted Theme".to_string(),
        logo_url: extracted.images.logo_url.clone(),
        banner_url: extracted.images.banner_url.clone(),
        colors,
        typography: ThemeTypography {
            font_family: extracted
                .typography
                .font_family
                .clone()
                .unwrap_or_else(|| defaults::FONT_FAMILY.to_string()),
            heading_font: extracted.typography.heading_font.clone(),
            ..ThemeTypography::default()
        },
        layout: ThemeLayout {
            border_radius: extracted
                .layout
                .border_radius
                .clone()
                .unwrap_or_else(|| defaults::BORDER_RADIUS.to_string()),
            spacing: extracted.layout.spacing.unwrap_or(ThemeLayout::default().spacing),
            sidebar_position: extracted
                .layout
                .sidebar_position
                .unwrap_or(ThemeLayout::default().sidebar_position),
            slip_style: ThemeLayout::default().slip_style,
        },
        components: ThemeComponents {
            button_style: extracted
                .components
                .button_style
                .unwrap_or(ThemeComponents::default().button_style),
            card_shadow: extracted
                .components
                .card_shadow
                .unwrap_or(ThemeComponents::default().card_shadow),
            ..ThemeComponents::default()
        },
        navigation: None,
    }
}

/// Expand a [`SimpleThemeColors`] triple into a complete theme.
///
/// `navigation` stands in for the header and nav backgrounds, `accent`
/// for the secondary color. Rejects unparseable input since these three
/// values are user-entered configuration, not scraped guesses.
pub fn from_simple(simple: &SimpleThemeColors) -> Result<OperatorTheme, CoreError> {
    let primary = require_hex("primary", &simple.primary)?;
    let navigation = require_hex("navigation", &simple.navigation)?;
    let accent = require_hex("accent", &simple.accent)?;

    let header_text = contrast_text(&navigation).to_string();
    let colors = derive_colors(DerivationInput {
        primary,
        secondary: accent,
        header_bg: navigation.clone(),
        header_text,
        nav_bg: navigation,
        background: defaults::BACKGROUND.to_string(),
        surface: defaults::SURFACE.to_string(),
        border: defaults::BORDER.to_string(),
        text: defaults::TEXT.to_string(),
    });

    Ok(OperatorTheme {
        id: "draft".to_string(),
        name: "Custom Theme".to_string(),
        logo_url: None,
        banner_url: None,
        colors,
        typography: ThemeTypography::default(),
        layout: ThemeLayout::default(),
        components: ThemeComponents::default(),
        navigation: None,
    })
}

/// The anchor colors every remaining role derives from.
struct DerivationInput {
    primary: String,
    secondary: String,
    header_bg: String,
    header_text: String,
    nav_bg: String,
    background: String,
    surface: String,
    border: String,
    text: String,
}

fn derive_colors(input: DerivationInput) -> ThemeColors {
    let DerivationInput {
        primary,
        secondary,
        header_bg,
        header_text,
        nav_bg,
        background,
        surface,
        border,
        text,
    } = input;

    ThemeColors {
        nav_text: contrast_text(&nav_bg).to_string(),
        nav_hover: lighten(&nav_bg, defaults::NAV_LIGHTEN_PERCENT),
        nav_active: primary.clone(),
        primary_hover: darken(&primary, defaults::HOVER_DARKEN_PERCENT),
        primary_text: contrast_text(&primary).to_string(),
        secondary_hover: darken(&secondary, defaults::HOVER_DARKEN_PERCENT),
        secondary_text: contrast_text(&secondary).to_string(),
        slip_bg: surface.clone(),
        slip_border: border.clone(),
        slip_header: lighten(&background, defaults::SLIP_HEADER_LIGHTEN_PERCENT),
        success: defaults::SUCCESS.to_string(),
        warning: defaults::WARNING.to_string(),
        error: defaults::ERROR.to_string(),
        odds_bg: surface.clone(),
        odds_text: text.clone(),
        odds_selected_bg: primary.clone(),
        odds_selected_text: contrast_text(&primary).to_string(),
        odds_hover_bg: lighten(&primary, defaults::ODDS_HOVER_LIGHTEN_PERCENT),
        odds_hover_text: text.clone(),
        text_muted: defaults::TEXT_MUTED.to_string(),
        header_bg,
        header_text,
        nav_bg,
        primary,
        secondary,
        background,
        surface,
        border,
        text,
    }
}

/// Normalize an optional scraped color, discarding anything unparseable.
fn clean(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(normalize_color)
}

/// Normalize a required user-entered color or fail validation.
fn require_hex(field: &str, value: &str) -> Result<String, CoreError> {
    normalize_color(value).ok_or_else(|| {
        CoreError::Validation(format!("'{field}' must be a valid hex color, got '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::model::{ExtractedColors, ExtractedTypography, SpacingDensity};

    fn simple(primary: &str, navigation: &str, accent: &str) -> SimpleThemeColors {
        SimpleThemeColors {
            primary: primary.to_string(),
            navigation: navigation.to_string(),
            accent: accent.to_string(),
        }
    }

    #[test]
    fn simple_to_full_derivation_scenario() {
        let theme = from_simple(&simple("#ff0000", "#000000", "#00ff00")).unwrap();

        assert_eq!(theme.colors.header_bg, "#000000");
        assert_eq!(theme.colors.header_text, "#ffffff");
        assert_eq!(theme.colors.primary, "#ff0000");
        assert_eq!(theme.colors.primary_text, "#ffffff");
        // Green is light enough for black text.
        assert_eq!(theme.colors.secondary, "#00ff00");
        assert_eq!(theme.colors.secondary_text, "#000000");
        theme.validate().unwrap();
    }

    #[test]
    fn from_simple_rejects_invalid_hex() {
        let err = from_simple(&simple("#ff0000", "navy", "#00ff00")).unwrap_err();
        assert!(err.to_string().contains("navigation"));
    }

    #[test]
    fn from_simple_normalizes_input_forms() {
        let theme = from_simple(&simple("rgb(255, 0, 0)", "#ABC", "#00ff00")).unwrap();
        assert_eq!(theme.colors.primary, "#ff0000");
        assert_eq!(theme.colors.header_bg, "#aabbcc");
    }

    #[test]
    fn synthesis_is_idempotent() {
        let extracted = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#c8102e".to_string()),
                background: Some("#f7f7f7".to_string()),
                ..Default::default()
            },
            typography: ExtractedTypography {
                font_family: Some("Roboto, sans-serif".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let a = serde_json::to_vec(&from_extracted(&extracted)).unwrap();
        let b = serde_json::to_vec(&from_extracted(&extracted)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dark_primary_becomes_header_background() {
        let extracted = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#c8102e".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = from_extracted(&extracted);
        assert_eq!(theme.colors.header_bg, "#c8102e");
        assert_eq!(theme.colors.header_text, "#ffffff");
    }

    #[test]
    fn light_primary_gets_fixed_dark_header() {
        let extracted = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#ffe100".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = from_extracted(&extracted);
        assert_eq!(theme.colors.header_bg, defaults::HEADER_BG);
        assert_eq!(theme.colors.primary_text, "#000000");
    }

    #[test]
    fn empty_extraction_yields_pure_defaults() {
        let theme = from_extracted(&ExtractedTheme::default());
        assert_eq!(theme.colors.primary, defaults::PRIMARY);
        assert_eq!(theme.colors.background, defaults::BACKGROUND);
        assert_eq!(theme.colors.success, defaults::SUCCESS);
        assert_eq!(theme.typography.font_family, defaults::FONT_FAMILY);
        theme.validate().unwrap();
    }

    #[test]
    fn unparseable_extracted_values_fall_back() {
        let extracted = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("garbage".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = from_extracted(&extracted);
        assert_eq!(theme.colors.primary, defaults::PRIMARY);
        theme.validate().unwrap();
    }

    #[test]
    fn extracted_layout_fields_carry_through() {
        let extracted = ExtractedTheme {
            layout: crate::theme::model::ExtractedLayout {
                border_radius: Some("16px".to_string()),
                spacing: Some(SpacingDensity::Spacious),
                sidebar_position: None,
            },
            ..Default::default()
        };
        let theme = from_extracted(&extracted);
        assert_eq!(theme.layout.border_radius, "16px");
        assert_eq!(theme.layout.spacing, SpacingDensity::Spacious);
    }

    #[test]
    fn status_colors_are_never_inferred() {
        let theme = from_extracted(&ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#00a826".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(theme.colors.success, defaults::SUCCESS);
        assert_eq!(theme.colors.error, defaults::ERROR);
    }
}
