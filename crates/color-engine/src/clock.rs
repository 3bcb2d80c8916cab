// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Wall-clock reading used by keyed gradients and the clock display.
//!
//! A plain value type so rendering and resolution stay deterministic in
//! tests: the controller captures the clock once per cycle and passes it
//! down.

use chrono::Timelike;

/// Local wall-clock time, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallClock {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Second, `0..=59`.
    pub second: u32,
}

impl WallClock {
    /// Captures the current local time.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}
