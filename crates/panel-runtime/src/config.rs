// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Panel configuration: the JSON document and the per-cycle snapshot.
//!
//! The config file is reloaded from disk at the start of every rendering
//! cycle (a full hot-reload, not a diff). Loading never fails the loop:
//! a missing or malformed document logs a warning and yields the built-in
//! default snapshot.
//!
//! # JSON Format
//! ```json
//! {
//!   "vendor_id": "0x0416",
//!   "product_id": "0x8001",
//!   "cpu_max_temp": 90, "cpu_min_temp": 30,
//!   "cpu_temperature_unit": "celsius",
//!   "display_mode": "alternate_time",
//!   "layout_mode": "big",
//!   "update_interval": 0.1,
//!   "cycle_duration": 5,
//!   "metrics_update_interval": 0.5,
//!   "metrics": { "colors": ["ffe000", "..."] },
//!   "time": { "colors": ["000000-00ff00-seconds", "..."] }
//! }
//! ```

use crate::{DeviceId, DisplayMode, ModeChoice};
use color_engine::{ColorSpec, MetricRange, DEFAULT_COLOR, FALLBACK_COLOR};
use metrics_probe::{TempUnit, TempUnits};
use panel_proto::Layout;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the config document.
pub const CONFIG_ENV_VAR: &str = "PANEL_RT_CONFIG";

/// Default config path when neither the CLI nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

const DEFAULT_VENDOR_ID: u16 = 0x0416;
const DEFAULT_PRODUCT_ID: u16 = 0x8001;

/// Resolves the config path: explicit argument, then [`CONFIG_ENV_VAR`],
/// then [`DEFAULT_CONFIG_PATH`].
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// The config document as written on disk. Every field is optional.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
struct RawConfig {
    vendor_id: String,
    product_id: String,
    cpu_max_temp: f64,
    gpu_max_temp: f64,
    cpu_min_temp: f64,
    gpu_min_temp: f64,
    cpu_max_usage: f64,
    gpu_max_usage: f64,
    cpu_min_usage: f64,
    gpu_min_usage: f64,
    cpu_temperature_unit: TempUnit,
    gpu_temperature_unit: TempUnit,
    display_mode: String,
    layout_mode: Layout,
    update_interval: f64,
    cycle_duration: f64,
    metrics_update_interval: f64,
    metrics: PaletteSection,
    time: PaletteSection,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct PaletteSection {
    colors: Option<Vec<String>>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            vendor_id: format!("0x{DEFAULT_VENDOR_ID:04x}"),
            product_id: format!("0x{DEFAULT_PRODUCT_ID:04x}"),
            cpu_max_temp: 90.0,
            gpu_max_temp: 90.0,
            cpu_min_temp: 30.0,
            gpu_min_temp: 30.0,
            cpu_max_usage: 100.0,
            gpu_max_usage: 100.0,
            cpu_min_usage: 0.0,
            gpu_min_usage: 0.0,
            cpu_temperature_unit: TempUnit::Celsius,
            gpu_temperature_unit: TempUnit::Celsius,
            display_mode: "metrics".to_string(),
            layout_mode: Layout::Big,
            update_interval: 0.1,
            cycle_duration: 5.0,
            metrics_update_interval: 0.5,
            metrics: PaletteSection::default(),
            time: PaletteSection::default(),
        }
    }
}

/// The immutable-per-cycle view the renderer works from.
///
/// Owned by the controller; rebuilt from disk every cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub device_id: DeviceId,
    pub units: TempUnits,
    /// Min/max normalization bounds per metric key.
    pub ranges: HashMap<String, MetricRange>,
    pub mode: ModeChoice,
    pub layout: Layout,
    /// Sleep between rendering cycles.
    pub update_interval: Duration,
    /// Cycle length in ticks; the tick counter wraps at twice this.
    pub cycle_ticks: u32,
    /// How often the metrics provider re-reads its sensors.
    pub metrics_refresh: Duration,
    /// Parsed color spec per LED for the "metrics" palette.
    pub metrics_palette: Vec<ColorSpec>,
    /// Parsed color spec per LED for the "time" palette.
    pub time_palette: Vec<ColorSpec>,
}

impl Snapshot {
    /// Loads and resolves the config document, falling back to the
    /// built-in defaults on any read or parse failure.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<RawConfig>(&content) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(
                        "config '{}' is malformed ({e}); using built-in defaults",
                        path.display()
                    );
                    RawConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "cannot read config '{}' ({e}); using built-in defaults",
                    path.display()
                );
                RawConfig::default()
            }
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Self {
        let device_id = DeviceId {
            vendor: parse_hex_id("vendor_id", &raw.vendor_id, DEFAULT_VENDOR_ID),
            product: parse_hex_id("product_id", &raw.product_id, DEFAULT_PRODUCT_ID),
        };

        let mut ranges = HashMap::new();
        ranges.insert(
            "cpu_temp".to_string(),
            MetricRange { min: raw.cpu_min_temp, max: raw.cpu_max_temp },
        );
        ranges.insert(
            "gpu_temp".to_string(),
            MetricRange { min: raw.gpu_min_temp, max: raw.gpu_max_temp },
        );
        ranges.insert(
            "cpu_usage".to_string(),
            MetricRange { min: raw.cpu_min_usage, max: raw.cpu_max_usage },
        );
        ranges.insert(
            "gpu_usage".to_string(),
            MetricRange { min: raw.gpu_min_usage, max: raw.gpu_max_usage },
        );

        let update_secs = if raw.update_interval > 0.0 {
            raw.update_interval
        } else {
            tracing::warn!(
                "update_interval {} is not positive, using 0.1 s",
                raw.update_interval
            );
            0.1
        };
        let cycle_ticks = ((raw.cycle_duration / update_secs) as u32).max(1);

        let layout = raw.layout_mode;
        let mode = match DisplayMode::parse(&raw.display_mode) {
            Some(mode) if mode.supported_on(layout) => ModeChoice::Recognized(mode),
            Some(mode) => {
                let fallback = DisplayMode::fallback_for(layout);
                tracing::warn!(
                    "display mode '{}' is not compatible with the {:?} layout, switching to '{}'",
                    mode.name(),
                    layout,
                    fallback.name()
                );
                ModeChoice::Recognized(fallback)
            }
            None => ModeChoice::Unrecognized(raw.display_mode),
        };

        let led_count = layout.led_count();
        Self {
            device_id,
            units: TempUnits {
                cpu: raw.cpu_temperature_unit,
                gpu: raw.gpu_temperature_unit,
            },
            ranges,
            mode,
            layout,
            update_interval: Duration::from_secs_f64(update_secs),
            cycle_ticks,
            metrics_refresh: Duration::from_secs_f64(raw.metrics_update_interval.max(0.0)),
            metrics_palette: parse_palette("metrics", raw.metrics.colors, led_count),
            time_palette: parse_palette("time", raw.time.colors, led_count),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

fn parse_hex_id(field: &str, input: &str, default: u16) -> u16 {
    let digits = input.trim().trim_start_matches("0x").trim_start_matches("0X");
    match u16::from_str_radix(digits, 16) {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("{field} '{input}' is not a hex id, using {default:#06x}");
            default
        }
    }
}

fn parse_palette(name: &str, colors: Option<Vec<String>>, led_count: usize) -> Vec<ColorSpec> {
    let Some(colors) = colors else {
        return vec![ColorSpec::Literal(DEFAULT_COLOR); led_count];
    };
    if colors.len() != led_count {
        tracing::warn!(
            "config {name} palette has {} entries, expected {led_count}; using fallback colors",
            colors.len()
        );
        return vec![ColorSpec::Literal(FALLBACK_COLOR); led_count];
    }
    colors
        .iter()
        .map(|entry| match ColorSpec::parse(entry) {
            Ok(spec) => spec,
            Err(e) => {
                tracing::warn!("bad color spec in {name} palette ({e}); using the default color");
                ColorSpec::Literal(DEFAULT_COLOR)
            }
        })
        .collect()
}
