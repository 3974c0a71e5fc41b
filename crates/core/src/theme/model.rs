//! Theme data structures.
//!
//! [`OperatorTheme`] is the complete, renderable theme: every color role
//! populated, every enum valid. [`ExtractedTheme`] is the all-optional
//! mirror produced by the extraction engine; it must pass through the
//! synthesizer before anything renders it. [`SimpleThemeColors`] is the
//! minimal three-color configuration surface.
//!
//! Wire names are camelCase so they line up with the `--theme-<role>`
//! CSS custom properties consumed by the preview.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingDensity {
    Compact,
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlipStyle {
    Minimal,
    Detailed,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Rounded,
    Square,
    Pill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardShadow {
    None,
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStyle {
    Outlined,
    Filled,
    Underlined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavStyle {
    Sidebar,
    Top,
    Tabs,
}

// ---------------------------------------------------------------------------
// OperatorTheme groups
// ---------------------------------------------------------------------------

/// All named color roles of a complete theme.
///
/// Invariant: every field holds a valid 6-digit hex string. Text roles
/// paired with a background are contrast-safe whenever derived by the
/// synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub header_bg: String,
    pub header_text: String,
    pub nav_bg: String,
    pub nav_text: String,
    pub nav_hover: String,
    pub nav_active: String,
    pub primary: String,
    pub primary_hover: String,
    pub primary_text: String,
    pub secondary: String,
    pub secondary_hover: String,
    pub secondary_text: String,
    pub background: String,
    pub surface: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub slip_bg: String,
    pub slip_border: String,
    pub slip_header: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub odds_bg: String,
    pub odds_text: String,
    pub odds_selected_bg: String,
    pub odds_selected_text: String,
    pub odds_hover_bg: String,
    pub odds_hover_text: String,
}

impl ThemeColors {
    /// Every color role as `(wire name, value)`, in declaration order.
    ///
    /// Single source of truth for validation and for the CSS
    /// custom-property mapping.
    pub fn roles(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("headerBg", &self.header_bg),
            ("headerText", &self.header_text),
            ("navBg", &self.nav_bg),
            ("navText", &self.nav_text),
            ("navHover", &self.nav_hover),
            ("navActive", &self.nav_active),
            ("primary", &self.primary),
            ("primaryHover", &self.primary_hover),
            ("primaryText", &self.primary_text),
            ("secondary", &self.secondary),
            ("secondaryHover", &self.secondary_hover),
            ("secondaryText", &self.secondary_text),
            ("background", &self.background),
            ("surface", &self.surface),
            ("border", &self.border),
            ("text", &self.text),
            ("textMuted", &self.text_muted),
            ("slipBg", &self.slip_bg),
            ("slipBorder", &self.slip_border),
            ("slipHeader", &self.slip_header),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("oddsBg", &self.odds_bg),
            ("oddsText", &self.odds_text),
            ("oddsSelectedBg", &self.odds_selected_bg),
            ("oddsSelectedText", &self.odds_selected_text),
            ("oddsHoverBg", &self.odds_hover_bg),
            ("oddsHoverText", &self.odds_hover_text),
        ]
    }
}

/// Typography tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    pub font_size_small: String,
    pub font_size_base: String,
    pub font_size_large: String,
    pub font_size_heading: String,
}

impl Default for ThemeTypography {
    fn default() -> Self {
        Self {
            font_family: super::synthesize::defaults::FONT_FAMILY.to_string(),
            heading_font: None,
            font_size_small: "12px".to_string(),
            font_size_base: "14px".to_string(),
            font_size_large: "16px".to_string(),
            font_size_heading: "22px".to_string(),
        }
    }
}

/// Layout tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeLayout {
    pub border_radius: String,
    pub spacing: SpacingDensity,
    pub sidebar_position: SidebarPosition,
    pub slip_style: SlipStyle,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            border_radius: super::synthesize::defaults::BORDER_RADIUS.to_string(),
            spacing: SpacingDensity::Normal,
            sidebar_position: SidebarPosition::Left,
            slip_style: SlipStyle::Detailed,
        }
    }
}

/// Component styling tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeComponents {
    pub button_style: ButtonStyle,
    pub button_shadow: bool,
    pub card_shadow: CardShadow,
    pub card_border: bool,
    pub input_style: InputStyle,
}

impl Default for ThemeComponents {
    fn default() -> Self {
        Self {
            button_style: ButtonStyle::Rounded,
            button_shadow: false,
            card_shadow: CardShadow::Sm,
            card_border: true,
            input_style: InputStyle::Outlined,
        }
    }
}

/// A single navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Optional navigation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeNavigation {
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub style: NavStyle,
}

impl Default for NavStyle {
    fn default() -> Self {
        NavStyle::Top
    }
}

// ---------------------------------------------------------------------------
// OperatorTheme
// ---------------------------------------------------------------------------

/// A complete, structurally valid operator theme.
///
/// `typography`, `layout`, and `components` carry `#[serde(default)]` so
/// payloads persisted before those groups existed rehydrate with defaults
/// merged in instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorTheme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    pub colors: ThemeColors,
    #[serde(default)]
    pub typography: ThemeTypography,
    #[serde(default)]
    pub layout: ThemeLayout,
    #[serde(default)]
    pub components: ThemeComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<ThemeNavigation>,
}

impl OperatorTheme {
    /// Check the structural invariants: every color role is a valid
    /// 6-digit hex string.
    ///
    /// Enum validity is enforced by the type system; this only has to
    /// police the string-typed color fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (role, value) in self.colors.roles() {
            if !is_hex_color(value) {
                return Err(CoreError::Validation(format!(
                    "Color role '{role}' must be a 6-digit hex string, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

/// Whether a string is a `#rrggbb` color (case-insensitive).
fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// ExtractedTheme
// ---------------------------------------------------------------------------

/// Color signals found by the extraction engine. Absence means "no
/// signal", never "use a default"; defaults are the synthesizer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub header_bg: Option<String>,
    pub header_text: Option<String>,
    pub nav_bg: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub border: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedTypography {
    pub font_family: Option<String>,
    pub heading_font: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedLayout {
    pub border_radius: Option<String>,
    pub spacing: Option<SpacingDensity>,
    pub sidebar_position: Option<SidebarPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedComponents {
    pub button_style: Option<ButtonStyle>,
    pub card_shadow: Option<CardShadow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedImages {
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
}

/// Partial theme inferred from a scraped page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedTheme {
    pub colors: ExtractedColors,
    pub typography: ExtractedTypography,
    pub layout: ExtractedLayout,
    pub components: ExtractedComponents,
    pub images: ExtractedImages,
}

impl ExtractedTheme {
    /// Whether any color role was detected.
    pub fn has_color_signal(&self) -> bool {
        let c = &self.colors;
        c.primary.is_some()
            || c.secondary.is_some()
            || c.header_bg.is_some()
            || c.nav_bg.is_some()
            || c.background.is_some()
    }

    /// Whether any typography was detected.
    pub fn has_typography_signal(&self) -> bool {
        self.typography.font_family.is_some() || self.typography.heading_font.is_some()
    }

    /// Overlay `self` onto a base bundle: any field present in `self`
    /// wins, everything else comes from `base`.
    ///
    /// Used when extraction found too little signal and a domain-pattern
    /// bundle fills the gaps.
    pub fn merged_over(&self, base: &ExtractedTheme) -> ExtractedTheme {
        fn pick<T: Clone>(ours: &Option<T>, theirs: &Option<T>) -> Option<T> {
            ours.clone().or_else(|| theirs.clone())
        }

        ExtractedTheme {
            colors: ExtractedColors {
                primary: pick(&self.colors.primary, &base.colors.primary),
                secondary: pick(&self.colors.secondary, &base.colors.secondary),
                header_bg: pick(&self.colors.header_bg, &base.colors.header_bg),
                header_text: pick(&self.colors.header_text, &base.colors.header_text),
                nav_bg: pick(&self.colors.nav_bg, &base.colors.nav_bg),
                background: pick(&self.colors.background, &base.colors.background),
                surface: pick(&self.colors.surface, &base.colors.surface),
                text: pick(&self.colors.text, &base.colors.text),
                border: pick(&self.colors.border, &base.colors.border),
            },
            typography: ExtractedTypography {
                font_family: pick(&self.typography.font_family, &base.typography.font_family),
                heading_font: pick(&self.typography.heading_font, &base.typography.heading_font),
            },
            layout: ExtractedLayout {
                border_radius: pick(&self.layout.border_radius, &base.layout.border_radius),
                spacing: pick(&self.layout.spacing, &base.layout.spacing),
                sidebar_position: pick(
                    &self.layout.sidebar_position,
                    &base.layout.sidebar_position,
                ),
            },
            components: ExtractedComponents {
                button_style: pick(&self.components.button_style, &base.components.button_style),
                card_shadow: pick(&self.components.card_shadow, &base.components.card_shadow),
            },
            images: ExtractedImages {
                logo_url: pick(&self.images.logo_url, &base.images.logo_url),
                banner_url: pick(&self.images.banner_url, &base.images.banner_url),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// SimpleThemeColors
// ---------------------------------------------------------------------------

/// The minimal user-facing configuration surface: three hex colors from
/// which the synthesizer derives every other role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleThemeColors {
    pub primary: String,
    pub navigation: String,
    pub accent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::synthesize;

    #[test]
    fn operator_theme_serializes_with_camel_case_wire_names() {
        let theme = synthesize::default_theme();
        let json = serde_json::to_value(&theme).unwrap();

        assert!(json["colors"]["headerBg"].is_string());
        assert!(json["colors"]["oddsSelectedBg"].is_string());
        assert!(json["typography"]["fontFamily"].is_string());
        assert!(json["layout"]["sidebarPosition"].is_string());
        assert!(json["components"]["buttonStyle"].is_string());
    }

    #[test]
    fn roles_cover_every_color_field() {
        let theme = synthesize::default_theme();
        let json = serde_json::to_value(&theme.colors).unwrap();
        let field_count = json.as_object().unwrap().len();
        assert_eq!(theme.colors.roles().len(), field_count);
    }

    #[test]
    fn validate_accepts_default_theme() {
        assert!(synthesize::default_theme().validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_color() {
        let mut theme = synthesize::default_theme();
        theme.colors.primary = "blue".to_string();
        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("primary"));
    }

    #[test]
    fn theme_without_new_groups_rehydrates_with_defaults() {
        // A persisted payload predating typography/layout/components.
        let old = serde_json::json!({
            "id": "t1",
            "name": "Legacy",
            "colors": serde_json::to_value(synthesize::default_theme().colors).unwrap(),
        });

        let theme: OperatorTheme = serde_json::from_value(old).unwrap();
        assert_eq!(theme.typography, ThemeTypography::default());
        assert_eq!(theme.layout, ThemeLayout::default());
        assert_eq!(theme.components, ThemeComponents::default());
        assert!(theme.navigation.is_none());
    }

    #[test]
    fn extracted_theme_merge_prefers_own_fields() {
        let base = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#c8102e".to_string()),
                background: Some("#f6f6f6".to_string()),
                ..Default::default()
            },
            typography: ExtractedTypography {
                font_family: Some("Roboto".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let ours = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#1976d2".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = ours.merged_over(&base);
        assert_eq!(merged.colors.primary.as_deref(), Some("#1976d2"));
        assert_eq!(merged.colors.background.as_deref(), Some("#f6f6f6"));
        assert_eq!(merged.typography.font_family.as_deref(), Some("Roboto"));
    }

    #[test]
    fn signal_helpers() {
        let empty = ExtractedTheme::default();
        assert!(!empty.has_color_signal());
        assert!(!empty.has_typography_signal());

        let with_color = ExtractedTheme {
            colors: ExtractedColors {
                primary: Some("#1976d2".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(with_color.has_color_signal());
    }
}
