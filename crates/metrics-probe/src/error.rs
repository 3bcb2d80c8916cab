// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for metric sampling.

/// Errors a metrics provider may surface.
///
/// The bundled [`SystemProbe`](crate::SystemProbe) degrades to `None`
/// readings instead of failing, but alternative providers (remote sensor
/// daemons, test doubles) can be stricter.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The provider's backing source went away entirely.
    #[error("metrics source unavailable: {detail}")]
    Unavailable { detail: String },

    /// A sensor reading could not be interpreted.
    #[error("failed to parse sensor reading from {path}: {detail}")]
    Parse { path: String, detail: String },
}
