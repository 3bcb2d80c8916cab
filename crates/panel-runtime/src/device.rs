// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The device transport: USB HID access behind a small trait.
//!
//! The panel may be unplugged at any time. The transport treats the
//! handle as possibly absent: [`DeviceTransport::ensure_open`] is called
//! every cycle and re-acquires the device transparently, and a failed
//! write drops the handle so the next cycle reopens it (failed writes are
//! retried on the next cycle, not within the current one).

use crate::PanelError;
use hidapi::{HidApi, HidDevice};

/// USB vendor/product id pair identifying the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    pub vendor: u16,
    pub product: u16,
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor, self.product)
    }
}

/// Writes framed reports to the panel.
///
/// Implemented by [`HidTransport`] in production and by a recording mock
/// in tests.
pub trait DeviceTransport {
    /// Makes sure a device handle for `id` is open, re-acquiring it if
    /// the id changed or a previous cycle lost it. Returns whether a
    /// handle is available.
    fn ensure_open(&mut self, id: DeviceId) -> bool;

    /// Writes one frame's reports in order.
    fn write_frame(&mut self, reports: &[Vec<u8>]) -> Result<(), PanelError>;
}

/// `hidapi`-backed transport.
pub struct HidTransport {
    api: HidApi,
    current: Option<DeviceId>,
    device: Option<HidDevice>,
}

impl HidTransport {
    /// Initializes the HID subsystem. No device is opened yet; that
    /// happens lazily on the first [`ensure_open`](DeviceTransport::ensure_open).
    pub fn new() -> Result<Self, PanelError> {
        Ok(Self {
            api: HidApi::new()?,
            current: None,
            device: None,
        })
    }
}

impl DeviceTransport for HidTransport {
    fn ensure_open(&mut self, id: DeviceId) -> bool {
        if self.current != Some(id) {
            if self.current.is_some() {
                tracing::warn!("configured device id changed to {id}, reinitializing device");
            }
            self.device = None;
            self.current = Some(id);
        }
        if self.device.is_none() {
            match self.api.open(id.vendor, id.product) {
                Ok(device) => {
                    tracing::info!("opened panel device {id}");
                    self.device = Some(device);
                }
                Err(e) => {
                    tracing::debug!("cannot open device {id}: {e}");
                }
            }
        }
        self.device.is_some()
    }

    fn write_frame(&mut self, reports: &[Vec<u8>]) -> Result<(), PanelError> {
        let Some(device) = self.device.as_ref() else {
            return Err(PanelError::WriteFailed("no open device".to_string()));
        };
        for report in reports {
            if let Err(e) = device.write(report) {
                // Drop the handle; the next cycle re-acquires it.
                self.device = None;
                return Err(PanelError::WriteFailed(e.to_string()));
            }
        }
        Ok(())
    }
}
