// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # metrics-probe
//!
//! Samples the host's CPU/GPU temperature and utilization for the panel
//! renderer.
//!
//! # Graceful Degradation
//! Readings that the host cannot provide (no GPU sensor, containerized
//! environment, unsupported platform) come back as `None` rather than
//! errors; the renderer shows a blank field for them. The probe caches its
//! last reading and refreshes at the configured interval, so the rendering
//! loop can sample every 100 ms without hammering sysfs.
//!
//! # Example
//! ```no_run
//! use metrics_probe::{MetricsProvider, SystemProbe, TempUnits};
//!
//! let mut probe = SystemProbe::new();
//! let sample = probe.sample(TempUnits::default()).expect("probe never fails");
//! println!("cpu: {:?} °, {:?} %", sample.cpu_temp, sample.cpu_usage);
//! ```

mod error;
mod provider;
mod system;

pub use error::ProbeError;
pub use provider::{MetricsProvider, MetricsSample, TempUnit, TempUnits};
pub use system::SystemProbe;
