use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// sRGB color parsed from `#rrggbb` hex notation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);

    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0xffffff)
    }

    /// Channels in [0, 1], still sRGB encoded.
    pub fn to_srgb(self) -> [f32; 3] {
        hex_to_rgb(self.0)
    }

    /// Channels converted to linear light for shading.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#').trim_start_matches("0x");
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_white() {
        let rgb = hex_to_rgb(0xffffff);
        assert_eq!(rgb, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hex_to_rgb_channels() {
        let rgb = hex_to_rgb(0xff8000);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!((rgb[1] - 0.502).abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }

    #[test]
    fn test_color_parse_and_display() {
        let color: Color = "#ffe4c4".parse().unwrap();
        assert_eq!(color, Color(0xffe4c4));
        assert_eq!(color.to_string(), "#ffe4c4");

        let upper: Color = "0xF5F5DC".parse().unwrap();
        assert_eq!(upper, Color(0xf5f5dc));
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_parse_rejects_sign() {
        assert!("+12345".parse::<Color>().is_err());
        assert!("#+12345".parse::<Color>().is_err());
        assert!("0x-12345".parse::<Color>().is_err());
        assert_eq!("#012345".parse::<Color>().unwrap(), Color(0x012345));
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color(0x808080)).unwrap();
        assert_eq!(json, "\"#808080\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color(0x808080));
    }
}
