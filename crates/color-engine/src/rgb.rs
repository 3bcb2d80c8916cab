// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! RGB color value: hex parsing, interpolation, wire bytes.

use crate::ColorError;
use rand::Rng;

/// Default palette color when a config omits its color list (warm yellow).
pub const DEFAULT_COLOR: Rgb = Rgb {
    r: 0xff,
    g: 0xe0,
    b: 0x00,
};

/// Uniform fallback when a configured palette has the wrong length (red,
/// so the misconfiguration is visible on the panel).
pub const FALLBACK_COLOR: Rgb = Rgb {
    r: 0xff,
    g: 0x00,
    b: 0x00,
};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a six-hex-digit color string such as `"ffe000"`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        if input.len() != 6 || !input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex {
                input: input.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            // Validated above: six ASCII hex digits.
            u8::from_str_radix(&input[range], 16).unwrap_or(0)
        };
        Ok(Self {
            r: channel(0..2),
            g: channel(2..4),
            b: channel(4..6),
        })
    }

    /// Returns the lowercase six-digit hex form.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the 3-byte wire form `[r, g, b]`.
    pub fn bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Per-channel linear interpolation between `start` and `end`.
    ///
    /// `factor` is clamped to `[0, 1]`: 0 yields `start`, 1 yields `end`.
    pub fn interpolate(start: Self, end: Self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * factor).round() as u8;
        Self {
            r: lerp(start.r, end.r),
            g: lerp(start.g, end.g),
            b: lerp(start.b, end.b),
        }
    }

    /// A uniformly random color.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
