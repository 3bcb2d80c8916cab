// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The rendering loop tying config, metrics, scheduler and transport
//! together.
//!
//! Each cycle: reload the config snapshot, sample the metrics, render the
//! frame for the current tick, frame it into HID reports, and write them.
//! Transient problems (device unplugged, probe failure, write failure)
//! degrade and are retried next cycle; only the out-of-range renderer
//! errors end the loop.

use crate::scheduler::{render, render_digit_demo};
use crate::{DeviceTransport, PanelError, Snapshot};
use color_engine::WallClock;
use metrics_probe::{MetricsProvider, MetricsSample};
use panel_proto::{frame_packets, FrameBuffer, Layout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// How long to wait before re-probing an absent device.
const OFFLINE_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Cadence of the digit test pattern.
const DEMO_INTERVAL: Duration = Duration::from_millis(100);

/// Drives one panel. Generic over the metrics source and the transport so
/// the whole loop is testable without hardware.
pub struct Controller<P, T> {
    config_path: PathBuf,
    provider: P,
    transport: T,
    frame: FrameBuffer,
    tick: u32,
}

impl<P: MetricsProvider, T: DeviceTransport> Controller<P, T> {
    pub fn new(config_path: PathBuf, provider: P, transport: T) -> Self {
        Self {
            config_path,
            provider,
            transport,
            frame: FrameBuffer::new(Layout::default()),
            tick: 0,
        }
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Runs one rendering cycle and returns how long to sleep before the
    /// next one.
    pub fn cycle(&mut self) -> Result<Duration, PanelError> {
        let snap = Snapshot::load(&self.config_path);
        self.provider.set_refresh_interval(snap.metrics_refresh);

        if !self.transport.ensure_open(snap.device_id) {
            tracing::warn!(
                "panel device {} not found, retrying in {:?}",
                snap.device_id,
                OFFLINE_RETRY_DELAY
            );
            return Ok(OFFLINE_RETRY_DELAY);
        }

        let sample = self.sample(&snap);
        self.frame.reset(snap.layout);
        render(&mut self.frame, &snap, &sample, self.tick, WallClock::now())?;
        self.write_current_frame();
        self.advance_tick(&snap);
        Ok(snap.update_interval)
    }

    /// Runs cycles until a fatal rendering error.
    pub async fn run(&mut self) -> Result<(), PanelError> {
        tracing::info!("panel controller started (config: {})", self.config_path.display());
        loop {
            let delay = self.cycle()?;
            tokio::time::sleep(delay).await;
        }
    }

    /// Runs the digit test pattern until Ctrl-C, then blanks the panel.
    pub async fn run_demo(&mut self) -> Result<(), PanelError> {
        tracing::info!("digit test pattern started, press Ctrl-C to stop");
        let stop = Arc::new(AtomicBool::new(false));
        {
            let stop = Arc::clone(&stop);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    stop.store(true, Ordering::SeqCst);
                }
            });
        }

        while !stop.load(Ordering::SeqCst) {
            self.demo_cycle()?;
            tokio::time::sleep(DEMO_INTERVAL).await;
        }

        // Leave the panel dark on the way out.
        let snap = Snapshot::load(&self.config_path);
        self.frame.reset(snap.layout);
        if self.transport.ensure_open(snap.device_id) {
            self.write_current_frame();
        }
        tracing::info!("digit test pattern stopped");
        Ok(())
    }

    /// One tick of the test pattern.
    pub fn demo_cycle(&mut self) -> Result<(), PanelError> {
        let snap = Snapshot::load(&self.config_path);
        self.provider.set_refresh_interval(snap.metrics_refresh);
        if !self.transport.ensure_open(snap.device_id) {
            tracing::warn!("panel device {} not found", snap.device_id);
            return Ok(());
        }

        let sample = self.sample(&snap);
        let epoch_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.frame.reset(snap.layout);
        render_digit_demo(
            &mut self.frame,
            &snap,
            &sample,
            self.tick,
            WallClock::now(),
            epoch_secs,
        )?;
        self.write_current_frame();
        self.advance_tick(&snap);
        Ok(())
    }

    fn sample(&mut self, snap: &Snapshot) -> MetricsSample {
        match self.provider.sample(snap.units) {
            Ok(sample) => sample,
            Err(e) => {
                tracing::warn!("metrics unavailable this cycle: {e}");
                MetricsSample::default()
            }
        }
    }

    fn write_current_frame(&mut self) {
        let reports = frame_packets(&self.frame);
        if let Err(e) = self.transport.write_frame(&reports) {
            // Transient: the transport dropped the handle and the next
            // cycle re-acquires it.
            tracing::warn!("frame write failed: {e}");
        }
    }

    fn advance_tick(&mut self, snap: &Snapshot) {
        self.tick = (self.tick + 1) % (snap.cycle_ticks * 2);
    }
}
