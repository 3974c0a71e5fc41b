//! Conversions between color notations and basic color arithmetic.

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parse a 3- or 6-digit hex color (with or without leading `#`).
///
/// 3-digit shorthand expands by digit duplication (`#abc` -> `#aabbcc`).
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let full = match digits.len() {
        6 => digits.to_string(),
        3 => digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>(),
        _ => return None,
    };

    if !full.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&full[0..2], 16).ok()?;
    let g = u8::from_str_radix(&full[2..4], 16).ok()?;
    let b = u8::from_str_radix(&full[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Render a color as a lowercase 6-digit hex string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Normalize any supported color literal to lowercase `#rrggbb`.
///
/// Accepts 3/6-digit hex, `rgb()`, `rgba()`, `hsl()`, and `hsla()`.
/// Alpha channels are discarded. Returns `None` for anything else; the
/// extraction engine treats unparseable literals as no signal.
pub fn normalize_color(value: &str) -> Option<String> {
    let value = value.trim();

    if value.starts_with('#') {
        return hex_to_rgb(value).map(rgb_to_hex);
    }

    let lower = value.to_ascii_lowercase();
    if let Some(args) = strip_function(&lower, &["rgba(", "rgb("]) {
        let nums = parse_args(args)?;
        if nums.len() < 3 {
            return None;
        }
        return Some(rgb_to_hex(Rgb::new(
            clamp_channel(nums[0]),
            clamp_channel(nums[1]),
            clamp_channel(nums[2]),
        )));
    }

    if let Some(args) = strip_function(&lower, &["hsla(", "hsl("]) {
        let nums = parse_args(args)?;
        if nums.len() < 3 {
            return None;
        }
        return Some(rgb_to_hex(hsl_to_rgb(nums[0], nums[1] / 100.0, nums[2] / 100.0)));
    }

    None
}

/// Strip a `name(args)` wrapper, returning the raw argument text.
fn strip_function<'a>(value: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    for prefix in prefixes {
        if let Some(rest) = value.strip_prefix(prefix) {
            return rest.strip_suffix(')');
        }
    }
    None
}

/// Parse comma- or space-separated numeric arguments, ignoring `%` and
/// `deg` suffixes and any slash-delimited alpha component.
fn parse_args(args: &str) -> Option<Vec<f64>> {
    let main = args.split('/').next().unwrap_or(args);
    let parts: Vec<f64> = main
        .split(|c| c == ',' || c == ' ')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('%').trim_end_matches("deg").parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    Some(parts)
}

fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert HSL (hue in degrees, saturation/lightness in 0..=1) to RGB.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        clamp_channel((r1 + m) * 255.0),
        clamp_channel((g1 + m) * 255.0),
        clamp_channel((b1 + m) * 255.0),
    )
}

/// Perceptual relative luminance (WCAG), in 0..=1.
pub fn luminance(rgb: Rgb) -> f64 {
    fn channel(v: u8) -> f64 {
        let v = f64::from(v) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(rgb.r) + 0.7152 * channel(rgb.g) + 0.0722 * channel(rgb.b)
}

/// Contrast-safe text color for the given background.
///
/// Light backgrounds (luminance above 0.5) get black text, everything
/// else gets white.
pub fn contrast_text(background: &str) -> &'static str {
    match hex_to_rgb(background) {
        Some(rgb) if luminance(rgb) > 0.5 => "#000000",
        _ => "#ffffff",
    }
}

/// Lighten a hex color by `percent` (0..=100), moving each channel
/// toward white. Unparseable input is returned unchanged.
pub fn lighten(hex: &str, percent: f64) -> String {
    shift(hex, percent / 100.0)
}

/// Darken a hex color by `percent` (0..=100), moving each channel
/// toward black. Unparseable input is returned unchanged.
pub fn darken(hex: &str, percent: f64) -> String {
    shift(hex, -percent / 100.0)
}

fn shift(hex: &str, amount: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };

    let apply = |v: u8| -> u8 {
        let v = f64::from(v);
        let shifted = if amount >= 0.0 {
            v + (255.0 - v) * amount
        } else {
            v * (1.0 + amount)
        };
        clamp_channel(shifted)
    };

    rgb_to_hex(Rgb::new(apply(rgb.r), apply(rgb.g), apply(rgb.b)))
}
