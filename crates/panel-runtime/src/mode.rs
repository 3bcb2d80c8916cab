// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Display modes and their layout capability table.
//!
//! Modes are a closed enum; the config document names them by string.
//! Mode-vs-layout compatibility is validated once at config-load time
//! through the capability table below, so the per-tick scheduler never
//! compares strings.

use panel_proto::Layout;

/// Every rendering routine the scheduler knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Temperature + utilization for both devices (big layout).
    Metrics,
    /// Full-panel clock: hours, minutes, seconds (big layout).
    Time,
    /// Clock on the GPU fields, metrics on the CPU fields.
    TimeCpu,
    /// Clock on the CPU fields, metrics on the GPU fields.
    TimeGpu,
    /// Clock and metrics swap device halves every half-period.
    AlternateTime,
    /// Full-panel clock and full-panel metrics alternate every half-period.
    AlternateTimeWithSeconds,
    /// Quarter-cycle rotation through the four metrics (small layout).
    AlternateMetrics,
    /// Fixed single-metric displays (small layout).
    CpuTemp,
    GpuTemp,
    CpuUsage,
    GpuUsage,
    /// Every LED on, for hardware bring-up.
    DebugUi,
}

/// Modes the full layout accepts.
const BIG_MODES: &[DisplayMode] = &[
    DisplayMode::Metrics,
    DisplayMode::Time,
    DisplayMode::TimeCpu,
    DisplayMode::TimeGpu,
    DisplayMode::AlternateTime,
    DisplayMode::AlternateTimeWithSeconds,
    DisplayMode::DebugUi,
];

/// Modes the reduced layout accepts.
const SMALL_MODES: &[DisplayMode] = &[
    DisplayMode::AlternateMetrics,
    DisplayMode::CpuTemp,
    DisplayMode::GpuTemp,
    DisplayMode::CpuUsage,
    DisplayMode::GpuUsage,
    DisplayMode::DebugUi,
];

impl DisplayMode {
    /// Parses a configured mode name. `None` means the name is not a mode
    /// at all (as opposed to a mode the active layout rejects).
    pub fn parse(name: &str) -> Option<Self> {
        let mode = match name {
            "metrics" => Self::Metrics,
            "time" => Self::Time,
            "time_cpu" => Self::TimeCpu,
            "time_gpu" => Self::TimeGpu,
            "alternate_time" => Self::AlternateTime,
            "alternate_time_with_seconds" => Self::AlternateTimeWithSeconds,
            "alternate_metrics" => Self::AlternateMetrics,
            "cpu_temp" => Self::CpuTemp,
            "gpu_temp" => Self::GpuTemp,
            "cpu_usage" => Self::CpuUsage,
            "gpu_usage" => Self::GpuUsage,
            "debug_ui" => Self::DebugUi,
            _ => return None,
        };
        Some(mode)
    }

    /// The config-document name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Time => "time",
            Self::TimeCpu => "time_cpu",
            Self::TimeGpu => "time_gpu",
            Self::AlternateTime => "alternate_time",
            Self::AlternateTimeWithSeconds => "alternate_time_with_seconds",
            Self::AlternateMetrics => "alternate_metrics",
            Self::CpuTemp => "cpu_temp",
            Self::GpuTemp => "gpu_temp",
            Self::CpuUsage => "cpu_usage",
            Self::GpuUsage => "gpu_usage",
            Self::DebugUi => "debug_ui",
        }
    }

    /// Whether a layout's panel can render this mode.
    pub fn supported_on(self, layout: Layout) -> bool {
        match layout {
            Layout::Big => BIG_MODES.contains(&self),
            Layout::Small => SMALL_MODES.contains(&self),
        }
    }

    /// The safe substitute when a configured mode does not fit the layout.
    pub fn fallback_for(layout: Layout) -> Self {
        match layout {
            Layout::Big => Self::Metrics,
            Layout::Small => Self::AlternateMetrics,
        }
    }
}

/// The config's mode choice after load-time resolution.
///
/// An unrecognized name is kept verbatim: the scheduler renders a blank
/// frame and logs it each tick rather than silently substituting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChoice {
    Recognized(DisplayMode),
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for mode in BIG_MODES.iter().chain(SMALL_MODES) {
            assert_eq!(DisplayMode::parse(mode.name()), Some(*mode));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(DisplayMode::parse("disco"), None);
        assert_eq!(DisplayMode::parse(""), None);
    }

    #[test]
    fn test_capability_table() {
        assert!(DisplayMode::Metrics.supported_on(Layout::Big));
        assert!(!DisplayMode::Metrics.supported_on(Layout::Small));
        assert!(DisplayMode::AlternateMetrics.supported_on(Layout::Small));
        assert!(!DisplayMode::AlternateMetrics.supported_on(Layout::Big));
        // debug_ui works everywhere.
        assert!(DisplayMode::DebugUi.supported_on(Layout::Big));
        assert!(DisplayMode::DebugUi.supported_on(Layout::Small));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(DisplayMode::fallback_for(Layout::Big), DisplayMode::Metrics);
        assert_eq!(
            DisplayMode::fallback_for(Layout::Small),
            DisplayMode::AlternateMetrics
        );
    }
}
