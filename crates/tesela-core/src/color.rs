//! Color types with hex parsing and luminance utilities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color from RGBA components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a `#rrggbb` or `#rgb` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(hex.to_string()))?;

        let (r, g, b) = match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)
                    .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
                let g = u8::from_str_radix(&hex[1..2], 16)
                    .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
                let b = u8::from_str_radix(&hex[2..3], 16)
                    .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
                (r * 17, g * 17, b * 17)
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))?;
                (r, g, b)
            }
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        Ok(Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ))
    }

    /// Format as a `#rrggbb` hex string (alpha ignored).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// WCAG relative luminance in `[0.0, 1.0]`.
    #[must_use]
    pub fn relative_luminance(&self) -> f32 {
        fn linearize(c: f32) -> f32 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Whether the color reads as light, so dark text stays legible on it.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.relative_luminance() > 0.5
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input did not start with `#`.
    MissingHash(String),
    /// Input was not 3 or 6 hex digits.
    InvalidLength(usize),
    /// Input contained a non-hex digit.
    InvalidDigit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash(s) => write!(f, "color '{s}' must start with '#'"),
            Self::InvalidLength(len) => {
                write!(f, "color must have 3 or 6 hex digits, got {len}")
            }
            Self::InvalidDigit(s) => write!(f, "color '{s}' contains a non-hex digit"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        let c = Color::from_hex("#1f77b4").unwrap();
        assert!((c.r - 31.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 119.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 180.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex_three_digits() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(
            Color::from_hex("1f77b4"),
            Err(ColorParseError::MissingHash("1f77b4".to_string()))
        );
        assert_eq!(
            Color::from_hex("#1f77b"),
            Err(ColorParseError::InvalidLength(5))
        );
        assert_eq!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit("zzzzzz".to_string()))
        );
    }

    #[test]
    fn test_to_hex_round_trip() {
        let c = Color::from_hex("#ff7f0e").unwrap();
        assert_eq!(c.to_hex(), "#ff7f0e");
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert!(Color::BLACK.relative_luminance() < 1e-6);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_is_light() {
        assert!(Color::WHITE.is_light());
        assert!(!Color::BLACK.is_light());
        // None of the chart palette colors crosses 0.5, so their
        // labels are always white.
        assert!(!Color::from_hex("#1f77b4").unwrap().is_light());
        assert!(!Color::from_hex("#bcbd22").unwrap().is_light());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength(4).to_string(),
            "color must have 3 or 6 hex digits, got 4"
        );
    }
}
