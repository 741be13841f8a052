// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `LinearRgba` color type and its sRGB/hex conversions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// Colors are authored in sRGB (hex strings or 0-255 bytes) and converted on
/// the way in; [`LinearRgba::hex_code`] converts back for consumers that want
/// the packed 24-bit form.
///
/// In configuration files a color is written as a hex string
/// (`"#RRGGBB"` or `"#RRGGBBAA"`).
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}': expected #RRGGBB or #RRGGBBAA")]
pub struct ColorParseError(pub String);

impl LinearRgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from 0-255 sRGB channels and a `[0, 1]` alpha.
    pub fn from_srgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
            a,
        }
    }

    /// Returns the sRGB channels as bytes.
    pub fn to_srgb8(&self) -> [u8; 3] {
        let quantize = |c: f32| (linear_to_srgb(c).clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Parses an sRGB hex string (`#RRGGBB` or `#RRGGBBAA`, leading `#` optional).
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ColorParseError(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorParseError(hex.to_string()))
        };

        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if digits.len() == 8 {
            channel(6)? as f32 / 255.0
        } else {
            1.0
        };
        Ok(Self::from_srgb8(r, g, b, a))
    }

    /// Packs the sRGB channels into a `0xRRGGBB` integer.
    pub fn hex_code(&self) -> u32 {
        let [r, g, b] = self.to_srgb8();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Formats the sRGB channels as a lowercase `rrggbb` string.
    pub fn hex(&self) -> String {
        format!("{:06x}", self.hex_code())
    }

    /// Formats the color as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb8();
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// Returns a new color with the same RGB components but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }
}

impl Default for LinearRgba {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for LinearRgba {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<LinearRgba> for String {
    fn from(color: LinearRgba) -> Self {
        color.to_hex()
    }
}

// --- Helper functions for sRGB conversion ---

/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else if c >= 1.0 {
        1.0
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear component to sRGB space.
#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_hex_codes() {
        assert_eq!(LinearRgba::RED.hex_code(), 0xFF0000);
        assert_eq!(LinearRgba::GREEN.hex_code(), 0x00FF00);
        assert_eq!(LinearRgba::BLUE.hex_code(), 0x0000FF);
        assert_eq!(LinearRgba::YELLOW.hex_code(), 0xFFFF00);
        assert_eq!(LinearRgba::MAGENTA.hex_code(), 0xFF00FF);
        assert_eq!(LinearRgba::CYAN.hex_code(), 0x00FFFF);
        assert_eq!(LinearRgba::WHITE.hex(), "ffffff");
        assert_eq!(LinearRgba::BLACK.hex(), "000000");
    }

    #[test]
    fn test_single_digit_channels_are_zero_padded() {
        let c = LinearRgba::from_srgb8(1, 2, 3, 1.0);
        assert_eq!(c.hex(), "010203");
    }

    #[test]
    fn test_parse_hex_with_and_without_alpha() {
        let opaque = LinearRgba::parse_hex("#FF8000").unwrap();
        assert_eq!(opaque.to_srgb8(), [255, 128, 0]);
        assert_eq!(opaque.a, 1.0);

        let translucent = LinearRgba::parse_hex("ff800080").unwrap();
        assert_eq!(translucent.to_srgb8(), [255, 128, 0]);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        assert!(LinearRgba::parse_hex("#FFF").is_err());
        assert!(LinearRgba::parse_hex("#GG0000").is_err());
        assert!(LinearRgba::parse_hex("").is_err());
    }

    #[test]
    fn test_to_hex_parses_back() {
        let c = LinearRgba::from_srgb8(12, 200, 99, 1.0);
        assert_eq!(LinearRgba::parse_hex(&c.to_hex()).unwrap().to_srgb8(), [12, 200, 99]);
    }
}
