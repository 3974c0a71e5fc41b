//! The operator theme model, synthesis, and CSS mapping.

pub mod css;
pub mod model;
pub mod patch;
pub mod synthesize;

pub use model::{
    ButtonStyle, CardShadow, ExtractedColors, ExtractedComponents, ExtractedImages,
    ExtractedLayout, ExtractedTheme, ExtractedTypography, InputStyle, MenuItem, NavStyle,
    OperatorTheme, SidebarPosition, SimpleThemeColors, SlipStyle, SpacingDensity, ThemeColors,
    ThemeComponents, ThemeLayout, ThemeNavigation, ThemeTypography,
};
pub use patch::ThemePatch;
