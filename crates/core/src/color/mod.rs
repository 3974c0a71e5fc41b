//! Color math and heuristic color classification.
//!
//! Everything here operates on plain sRGB values. Colors cross module
//! boundaries as lowercase 6-digit hex strings (`#rrggbb`); [`Rgb`] is
//! the working representation inside computations.

mod classify;
mod convert;

pub use classify::{
    color_distance, dominant_family, is_dark, is_neutral, is_vibrant, ColorFamily, FAMILIES,
};
pub use convert::{
    contrast_text, darken, hex_to_rgb, lighten, luminance, normalize_color, rgb_to_hex, Rgb,
};
