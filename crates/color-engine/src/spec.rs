// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsed color specifications.
//!
//! Config palettes are lists of strings; each is parsed once per config
//! reload into a [`ColorSpec`] so the per-tick resolver never touches
//! strings again.

use crate::{ColorError, Rgb};

/// What drives a three-part gradient's interpolation factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientKey {
    /// Current second divided by 59.
    Seconds,
    /// Current minute divided by 59.
    Minutes,
    /// Current hour divided by 23.
    Hours,
    /// A metric name (e.g. `cpu_temp`), normalized against its configured
    /// min/max range.
    Metric(String),
}

impl GradientKey {
    fn parse(key: &str) -> Self {
        match key {
            "seconds" => Self::Seconds,
            "minutes" => Self::Minutes,
            "hours" => Self::Hours,
            other => Self::Metric(other.to_string()),
        }
    }
}

/// One configured color entry for an LED position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// A fixed color.
    Literal(Rgb),
    /// A fresh random color on every resolution.
    Random,
    /// `start-end`: pulses 0 -> 1 -> 0 over one cycle of the tick counter.
    Pulse { start: Rgb, end: Rgb },
    /// `start-end-key`: factor follows a wall-clock unit or a metric.
    Keyed {
        start: Rgb,
        end: Rgb,
        key: GradientKey,
    },
}

impl ColorSpec {
    /// Parses a config color entry.
    ///
    /// `"random"` is matched case-insensitively; a dash splits gradient
    /// parts; anything else must be a literal hex color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("random") {
            return Ok(Self::Random);
        }
        if !input.contains('-') {
            return Ok(Self::Literal(Rgb::from_hex(input)?));
        }
        let parts: Vec<&str> = input.split('-').collect();
        match parts.as_slice() {
            [start, end] => Ok(Self::Pulse {
                start: Rgb::from_hex(start)?,
                end: Rgb::from_hex(end)?,
            }),
            [start, end, key] => Ok(Self::Keyed {
                start: Rgb::from_hex(start)?,
                end: Rgb::from_hex(end)?,
                key: GradientKey::parse(key),
            }),
            _ => Err(ColorError::InvalidGradient {
                input: input.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(
            ColorSpec::parse("ffe000").unwrap(),
            ColorSpec::Literal(Rgb::from_hex("ffe000").unwrap())
        );
    }

    #[test]
    fn test_parse_random_any_case() {
        assert_eq!(ColorSpec::parse("random").unwrap(), ColorSpec::Random);
        assert_eq!(ColorSpec::parse("RANDOM").unwrap(), ColorSpec::Random);
    }

    #[test]
    fn test_parse_pulse() {
        let spec = ColorSpec::parse("000000-ff0000").unwrap();
        assert!(matches!(spec, ColorSpec::Pulse { .. }));
    }

    #[test]
    fn test_parse_keyed_time_units() {
        for (input, key) in [
            ("000000-ff0000-seconds", GradientKey::Seconds),
            ("000000-ff0000-minutes", GradientKey::Minutes),
            ("000000-ff0000-hours", GradientKey::Hours),
        ] {
            match ColorSpec::parse(input).unwrap() {
                ColorSpec::Keyed { key: k, .. } => assert_eq!(k, key),
                other => panic!("expected keyed spec, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_keyed_metric() {
        match ColorSpec::parse("0000ff-ff0000-cpu_temp").unwrap() {
            ColorSpec::Keyed { key, .. } => {
                assert_eq!(key, GradientKey::Metric("cpu_temp".to_string()));
            }
            other => panic!("expected keyed spec, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        assert!(ColorSpec::parse("nothex").is_err());
        assert!(ColorSpec::parse("000000-zzz").is_err());
    }

    #[test]
    fn test_parse_rejects_four_parts() {
        assert!(matches!(
            ColorSpec::parse("000000-ff0000-cpu_temp-extra"),
            Err(ColorError::InvalidGradient { .. })
        ));
    }
}
