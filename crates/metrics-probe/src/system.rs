// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Host metrics via `sysinfo`, with a sysfs fallback for the CPU
//! temperature.
//!
//! Temperature sensors are matched by label substring: hardware exposes
//! wildly different names (`Tctl`, `Package id 0`, `edge`, ...), so the
//! probe takes the first component whose label looks like the device in
//! question. GPU utilization has no portable source and stays `None`.

use crate::{MetricsProvider, MetricsSample, ProbeError, TempUnits};
use std::path::Path;
use std::time::{Duration, Instant};
use sysinfo::{Components, System};

/// Label substrings identifying a CPU temperature sensor.
const CPU_SENSOR_HINTS: &[&str] = &["cpu", "tctl", "package", "core"];

/// Label substrings identifying a GPU temperature sensor.
const GPU_SENSOR_HINTS: &[&str] = &["gpu", "edge", "junction"];

/// Fallback sysfs path for the CPU thermal zone (millidegrees Celsius).
const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Samples the local host through `sysinfo`.
///
/// Readings are cached and refreshed at most once per refresh interval
/// (the config's `metrics_update_interval`); unit conversion happens on
/// every call so a config unit change takes effect immediately.
pub struct SystemProbe {
    system: System,
    components: Components,
    refresh_interval: Duration,
    last_refresh: Option<Instant>,
    cached: CelsiusSample,
}

/// Raw readings before unit conversion.
#[derive(Debug, Clone, Copy, Default)]
struct CelsiusSample {
    cpu_temp: Option<f64>,
    gpu_temp: Option<f64>,
    cpu_usage: Option<f64>,
    gpu_usage: Option<f64>,
}

impl SystemProbe {
    /// Creates a probe with the default 500 ms refresh interval.
    pub fn new() -> Self {
        Self {
            system: System::new(),
            components: Components::new_with_refreshed_list(),
            refresh_interval: Duration::from_millis(500),
            last_refresh: None,
            cached: CelsiusSample::default(),
        }
    }

    fn refresh(&mut self) {
        self.system.refresh_cpu_usage();
        self.components.refresh();

        self.cached = CelsiusSample {
            cpu_temp: self
                .find_temperature(CPU_SENSOR_HINTS)
                .or_else(|| read_thermal_zone(Path::new(THERMAL_ZONE_PATH))),
            gpu_temp: self.find_temperature(GPU_SENSOR_HINTS),
            cpu_usage: Some(self.system.global_cpu_usage() as f64),
            // No portable utilization source for discrete GPUs.
            gpu_usage: None,
        };
    }

    fn find_temperature(&self, hints: &[&str]) -> Option<f64> {
        self.components.iter().find_map(|component| {
            let label = component.label().to_lowercase();
            if hints.iter().any(|hint| label.contains(hint)) {
                Some(component.temperature() as f64)
            } else {
                None
            }
        })
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SystemProbe {
    fn sample(&mut self, units: TempUnits) -> Result<MetricsSample, ProbeError> {
        let due = match self.last_refresh {
            Some(at) => at.elapsed() >= self.refresh_interval,
            None => true,
        };
        if due {
            self.refresh();
            self.last_refresh = Some(Instant::now());
        }

        Ok(MetricsSample {
            cpu_temp: self.cached.cpu_temp.map(|t| units.cpu.from_celsius(t)),
            gpu_temp: self.cached.gpu_temp.map(|t| units.gpu.from_celsius(t)),
            cpu_usage: self.cached.cpu_usage,
            gpu_usage: self.cached.gpu_usage,
        })
    }

    fn set_refresh_interval(&mut self, interval: Duration) {
        self.refresh_interval = interval;
    }
}

/// Reads a thermal-zone file reporting millidegrees Celsius (e.g. `54321`
/// means 54.321 °C). Returns `None` when the path is missing or garbled,
/// as happens in containers and on non-Linux hosts.
fn read_thermal_zone(path: &Path) -> Option<f64> {
    let content = std::fs::read_to_string(path).ok()?;
    match content.trim().parse::<i64>() {
        Ok(millidegrees) => Some(millidegrees as f64 / 1000.0),
        Err(_) => {
            tracing::warn!(
                "thermal zone {} held non-numeric content, ignoring",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("metrics_probe_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "{content}").unwrap();
        path
    }

    #[test]
    fn test_thermal_zone_millidegrees() {
        let p = write_temp("zone_54321", "54321\n");
        assert_eq!(read_thermal_zone(&p), Some(54.321));
        let _ = std::fs::remove_file(&p);
    }

    #[test]
    fn test_thermal_zone_missing() {
        assert_eq!(read_thermal_zone(Path::new("/nonexistent/thermal/temp")), None);
    }

    #[test]
    fn test_thermal_zone_garbled() {
        let p = write_temp("zone_bad", "not_a_number");
        assert_eq!(read_thermal_zone(&p), None);
        let _ = std::fs::remove_file(&p);
    }

    #[test]
    fn test_sample_never_fails() {
        let mut probe = SystemProbe::new();
        let sample = probe.sample(TempUnits::default()).unwrap();
        // Usage is always reported (possibly 0.0 on the first refresh).
        assert!(sample.cpu_usage.is_some());
    }

    #[test]
    fn test_cache_respects_interval() {
        let mut probe = SystemProbe::new();
        probe.set_refresh_interval(Duration::from_secs(3600));
        let first = probe.sample(TempUnits::default()).unwrap();
        let second = probe.sample(TempUnits::default()).unwrap();
        // Within the interval the cached reading is returned as-is.
        assert_eq!(first, second);
    }

    #[test]
    fn test_unit_change_applies_to_cache() {
        let mut probe = SystemProbe::new();
        probe.set_refresh_interval(Duration::from_secs(3600));
        probe.cached.cpu_temp = Some(100.0);
        probe.last_refresh = Some(Instant::now());

        let celsius = probe.sample(TempUnits::default()).unwrap();
        assert_eq!(celsius.cpu_temp, Some(100.0));

        let fahrenheit = probe
            .sample(TempUnits {
                cpu: crate::TempUnit::Fahrenheit,
                gpu: crate::TempUnit::Celsius,
            })
            .unwrap();
        assert_eq!(fahrenheit.cpu_temp, Some(212.0));
    }
}
