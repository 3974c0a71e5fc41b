//! Mapping from a theme to CSS custom properties.
//!
//! These `--theme-*` names are part of the wire contract between the
//! theme system and every rendered view: any consuming stylesheet may
//! reference them directly.

use std::collections::BTreeMap;

use crate::theme::model::{OperatorTheme, SpacingDensity};

/// Numeric scale factor a spacing density maps to.
pub fn spacing_scale(spacing: SpacingDensity) -> f64 {
    match spacing {
        SpacingDensity::Compact => 0.75,
        SpacingDensity::Normal => 1.0,
        SpacingDensity::Spacious => 1.25,
    }
}

/// Render a theme as the full set of CSS custom properties a preview
/// document sets on its root.
///
/// Every color role becomes `--theme-<role>`, plus the font, radius,
/// and spacing-scale properties. Deterministic ordering (BTreeMap) so
/// repeated applications are byte-identical.
pub fn custom_properties(theme: &OperatorTheme) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for (role, value) in theme.colors.roles() {
        vars.insert(format!("--theme-{role}"), value.to_string());
    }

    vars.insert(
        "--theme-font-family".to_string(),
        theme.typography.font_family.clone(),
    );
    if let Some(heading) = &theme.typography.heading_font {
        vars.insert("--theme-heading-font".to_string(), heading.clone());
    }
    vars.insert(
        "--theme-border-radius".to_string(),
        theme.layout.border_radius.clone(),
    );
    vars.insert(
        "--theme-spacing-scale".to_string(),
        format_scale(spacing_scale(theme.layout.spacing)),
    );

    vars
}

/// Render the scale factor as a CSS number (`1`, `0.75`, `1.25`).
fn format_scale(scale: f64) -> String {
    if (scale - 1.0).abs() < f64::EPSILON {
        "1".to_string()
    } else {
        format!("{scale}")
    }
}
