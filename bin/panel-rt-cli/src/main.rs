// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # panel-rt
//!
//! Daemon entry point for the USB 7-segment LED panel.
//!
//! ## Usage
//! ```bash
//! # Run with the default config search (./config.json or $PANEL_RT_CONFIG)
//! panel-rt
//!
//! # Run with an explicit config document
//! panel-rt /etc/panel-rt/config.json
//!
//! # Cycle the digit test pattern instead of live metrics
//! panel-rt --test
//! ```
//!
//! The config document is re-read every cycle, so edits apply live
//! without restarting the daemon.

use clap::Parser;
use metrics_probe::SystemProbe;
use panel_runtime::{resolve_config_path, Controller, HidTransport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "panel-rt",
    about = "Drives a USB HID 7-segment LED panel with system metrics",
    version,
    author
)]
struct Cli {
    /// Path to the JSON config document. Falls back to $PANEL_RT_CONFIG,
    /// then ./config.json.
    config: Option<std::path::PathBuf>,

    /// Cycle a repeated-digit test pattern instead of live metrics.
    #[arg(long)]
    test: bool,

    /// Enable verbose logging (repeat for more: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = resolve_config_path(cli.config);
    let probe = SystemProbe::new();
    let transport = HidTransport::new()?;
    let mut controller = Controller::new(config_path, probe, transport);

    if cli.test {
        controller.run_demo().await?;
    } else {
        controller.run().await?;
    }
    Ok(())
}
