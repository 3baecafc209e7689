use serde::{Deserialize, Serialize};

/// 8-bit RGB triple parsed from hex notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb` or `#rgb`. Anything else is `None`.
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scales every channel by `1 + percent / 100`, clamped to the byte range.
    pub fn shaded(self, percent: f64) -> Self {
        let factor = 1.0 + percent / 100.0;
        let channel = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Darkens (negative `percent`) or lightens a hex color.
///
/// Input that is not hex (`rgba(...)`, named colors, garbage) comes back unchanged.
pub fn shade(color: &str, percent: f64) -> String {
    if !percent.is_finite() {
        return color.to_string();
    }
    match Rgb::parse_hex(color) {
        Some(rgb) => rgb.shaded(percent).to_hex(),
        None => color.to_string(),
    }
}
