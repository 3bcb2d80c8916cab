// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # panel-runtime
//!
//! The control loop for the USB HID 7-segment LED panel.
//!
//! The runtime takes:
//! - Segment encodings from `segment-codec`.
//! - Resolved colors from `color-engine`.
//! - The frame buffer and report framing from `panel-proto`.
//! - Live readings from `metrics-probe`.
//!
//! And drives the panel cycle by cycle: reload the config, sample the
//! metrics, render the active display mode, write the frame.
//!
//! # Degradation Policy
//! The loop is built to keep running: missing config, absent device,
//! probe failures and write failures all degrade with a warning and are
//! retried. The only fatal conditions are readings that physically cannot
//! fit their digit fields, which indicate a provider bug.
//!
//! # Async Execution
//! Uses `tokio` on a current-thread runtime; the loop is a single task
//! that sleeps between cycles, so there is nothing to parallelize.

mod config;
mod controller;
mod device;
mod error;
mod mode;
pub mod scheduler;

pub use config::{resolve_config_path, Snapshot, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
pub use controller::Controller;
pub use device::{DeviceId, DeviceTransport, HidTransport};
pub use error::PanelError;
pub use mode::{DisplayMode, ModeChoice};
