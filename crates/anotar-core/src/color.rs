//! 24-bit RGB color with hex parsing and integer percent blending.

use serde::{Deserialize, Serialize};

/// RGB color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component [0, 255]
    pub r: u8,
    /// Green component [0, 255]
    pub g: u8,
    /// Blue component [0, 255]
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#FFFF99" or "ffff99").
    ///
    /// A leading `#` is stripped; exactly six hex digits are required.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorParseError::InvalidHex)?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorParseError::InvalidHex)?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorParseError::InvalidHex)?;

        Ok(Self::new(r, g, b))
    }

    /// Format as `#RRGGBB`, uppercase, zero-padded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear blend between two colors at an integer percent in 0..=100.
    ///
    /// Each channel moves independently:
    /// `round(start + (percent / 100) * (end - start))`, round half up.
    /// Percents above 100 are treated as 100.
    #[must_use]
    pub fn blend(start: Self, end: Self, percent: u32) -> Self {
        let percent = percent.min(100);
        Self::new(
            Self::blend_channel(start.r, end.r, percent),
            Self::blend_channel(start.g, end.g, percent),
            Self::blend_channel(start.b, end.b, percent),
        )
    }

    fn blend_channel(start: u8, end: u8, percent: u32) -> u8 {
        let start = f64::from(start);
        let end = f64::from(end);
        let t = f64::from(percent) / 100.0;
        // Inputs are confined to the byte domain, so the rounded result is too.
        (start + t * (end - start)).round() as u8
    }

    /// Pale-yellow highlight color used at the start of a fade.
    pub const PALE_YELLOW: Self = Self {
        r: 0xFF,
        g: 0xFF,
        b: 0x99,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6)"),
        }
    }
}

impl std::error::Error for ColorParseError {}
