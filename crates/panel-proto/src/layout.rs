// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Physical layouts and semantic index maps.
//!
//! Every addressable field of the panel is a contiguous span of LED
//! positions. The big layout splits the panel into a CPU half and a GPU
//! half, each with its own temperature field (3 digits), usage field
//! (2 hundreds-LEDs + 2 digits), unit LEDs, and device LED. The small
//! layout has a single shared 3-digit frame plus annotation LEDs.

use std::ops::Range;

/// Number of physical LEDs on the panel. The wire protocol always carries
/// a color for every one of them.
pub const PANEL_LED_COUNT: usize = 100;

/// GPU half offset in the big layout.
const GPU_OFFSET: usize = 50;

/// Which physical LED arrangement is active.
///
/// Determines both the index map and the set of valid display modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Full panel: separate CPU and GPU digit fields.
    #[default]
    Big,
    /// Reduced panel: one shared digit frame.
    Small,
}

impl Layout {
    /// LED-buffer length for this layout.
    ///
    /// Both current panels expose the full frame; the reduced layout
    /// simply leaves most positions unaddressed.
    pub fn led_count(self) -> usize {
        PANEL_LED_COUNT
    }

    /// All semantic keys this layout's index map defines.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Big => &[
                "cpu",
                "cpu_led",
                "cpu_temp",
                "cpu_celsius",
                "cpu_fahrenheit",
                "cpu_usage",
                "cpu_percent_led",
                "gpu",
                "gpu_led",
                "gpu_temp",
                "gpu_celsius",
                "gpu_fahrenheit",
                "gpu_usage",
                "gpu_percent_led",
            ],
            Self::Small => &[
                "digit_frame",
                "celsius",
                "fahrenheit",
                "percent_led",
                "cpu_led",
                "gpu_led",
            ],
        }
    }
}

/// Looks up the LED-buffer span a semantic key addresses under a layout.
///
/// Returns `None` for keys the layout does not define; callers treat that
/// as a non-fatal lookup miss.
pub fn span(layout: Layout, key: &str) -> Option<Range<usize>> {
    match layout {
        Layout::Big => big_span(key),
        Layout::Small => small_span(key),
    }
}

fn big_span(key: &str) -> Option<Range<usize>> {
    let (device_key, offset) = match key.strip_prefix("gpu") {
        Some(rest) => (rest, GPU_OFFSET),
        None => (key.strip_prefix("cpu")?, 0),
    };
    let local = match device_key {
        // Whole device half, used for palette painting.
        "" => 0..50,
        "_led" => 0..1,
        "_temp" => 1..22,
        "_celsius" => 22..23,
        "_fahrenheit" => 23..24,
        "_usage" => 24..40,
        "_percent_led" => 40..41,
        _ => return None,
    };
    Some(local.start + offset..local.end + offset)
}

fn small_span(key: &str) -> Option<Range<usize>> {
    let range = match key {
        "digit_frame" => 0..21,
        "celsius" => 21..22,
        "fahrenheit" => 22..23,
        "percent_led" => 23..24,
        "cpu_led" => 24..25,
        "gpu_led" => 25..26,
        _ => return None,
    };
    Some(range)
}
