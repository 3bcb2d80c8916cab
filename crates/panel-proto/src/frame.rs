// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The per-cycle LED frame: intensities plus a parallel color buffer.
//!
//! All writes go through semantic keys so callers never handle raw LED
//! positions. An unknown key is a warning and a skipped write, never a
//! failure; the buffers always stay fully initialized.

use crate::{span, Layout, PANEL_LED_COUNT};
use color_engine::{Rgb, DEFAULT_COLOR};

/// One frame's LED state: an intensity per LED (0 = off) and the color it
/// shows when lit.
///
/// Owned and mutated exclusively by the controller; cleared at the start
/// of every rendering cycle.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    layout: Layout,
    leds: [u8; PANEL_LED_COUNT],
    colors: [Rgb; PANEL_LED_COUNT],
}

impl FrameBuffer {
    /// Creates a cleared frame for the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            leds: [0; PANEL_LED_COUNT],
            colors: [DEFAULT_COLOR; PANEL_LED_COUNT],
        }
    }

    /// Clears the frame and switches it to `layout`.
    ///
    /// Called once per cycle: every LED off, every color back to the
    /// default, ready for this tick's mode to repaint.
    pub fn reset(&mut self, layout: Layout) {
        self.layout = layout;
        self.leds = [0; PANEL_LED_COUNT];
        self.colors = [DEFAULT_COLOR; PANEL_LED_COUNT];
    }

    /// The active layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Raw intensity buffer.
    pub fn leds(&self) -> &[u8; PANEL_LED_COUNT] {
        &self.leds
    }

    /// Raw color buffer.
    pub fn colors(&self) -> &[Rgb; PANEL_LED_COUNT] {
        &self.colors
    }

    /// Sets every LED of a keyed group to one intensity.
    pub fn fill_group(&mut self, key: &str, value: u8) {
        let Some(range) = self.lookup(key) else { return };
        self.leds[range].fill(value);
    }

    /// Writes per-LED intensities into a keyed group.
    ///
    /// `values` must match the group's width; a mismatch is logged and
    /// skipped like an unknown key.
    pub fn write_group(&mut self, key: &str, values: &[u8]) {
        let Some(range) = self.lookup(key) else { return };
        if values.len() != range.len() {
            tracing::warn!(
                "group '{key}' expects {} values, got {}; skipping write",
                range.len(),
                values.len()
            );
            return;
        }
        self.leds[range].copy_from_slice(values);
    }

    /// Turns every LED on (debug mode).
    pub fn set_all(&mut self, value: u8) {
        self.leds.fill(value);
    }

    /// Copies the palette entries covering a keyed group into the color
    /// buffer. The palette is indexed by absolute LED position, so a group
    /// keeps its configured per-LED colors.
    pub fn paint_group(&mut self, key: &str, palette: &[Rgb; PANEL_LED_COUNT]) {
        let Some(range) = self.lookup(key) else { return };
        self.colors[range.clone()].copy_from_slice(&palette[range]);
    }

    /// Replaces the whole color buffer with a resolved palette.
    pub fn paint_all(&mut self, palette: &[Rgb; PANEL_LED_COUNT]) {
        self.colors = *palette;
    }

    fn lookup(&self, key: &str) -> Option<std::ops::Range<usize>> {
        let range = span(self.layout, key);
        if range.is_none() {
            tracing::warn!("key '{key}' not found in the {:?} layout index map", self.layout);
        }
        range
    }
}
