// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The provider interface and sample type consumed by the renderer.

use crate::ProbeError;
use std::time::Duration;

/// Temperature display unit, per device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    /// Converts a Celsius reading into this unit.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Display units for the two monitored devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempUnits {
    pub cpu: TempUnit,
    pub gpu: TempUnit,
}

/// One reading of all four panel metrics, temperatures already converted
/// to the requested display units.
///
/// `None` means "no data": the renderer blanks the field instead of
/// showing a stale or invented number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsSample {
    pub cpu_temp: Option<f64>,
    pub gpu_temp: Option<f64>,
    pub cpu_usage: Option<f64>,
    pub gpu_usage: Option<f64>,
}

impl MetricsSample {
    /// Looks a metric up by its gradient-spec key.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "cpu_temp" => self.cpu_temp,
            "gpu_temp" => self.gpu_temp,
            "cpu_usage" => self.cpu_usage,
            "gpu_usage" => self.gpu_usage,
            _ => None,
        }
    }

    /// Rounds a reading to the integer shown on the digit field, with `-1`
    /// as the "no data" sentinel the encoder blanks out.
    pub fn display_value(reading: Option<f64>) -> i32 {
        match reading {
            Some(value) if value >= 0.0 => value.round() as i32,
            _ => -1,
        }
    }
}

/// Source of panel metrics.
///
/// The production implementation is [`SystemProbe`](crate::SystemProbe);
/// tests substitute a fixed-value mock.
pub trait MetricsProvider {
    /// Returns the current metrics in the requested display units.
    fn sample(&mut self, units: TempUnits) -> Result<MetricsSample, ProbeError>;

    /// Adjusts how often the underlying source is re-read. Providers
    /// without caching ignore this.
    fn set_refresh_interval(&mut self, _interval: Duration) {}
}
