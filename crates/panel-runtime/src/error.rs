// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the panel runtime.

/// Errors raised while rendering or talking to the device.
///
/// The two out-of-range variants are the only fatal conditions in the
/// whole pipeline: they indicate a metrics-provider bug, not a transient
/// state, so they abort the run instead of degrading.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A temperature that does not fit the 3-digit field.
    #[error("temperature {value} cannot be shown on the 3-digit field (must be < 1000)")]
    TemperatureOutOfRange { value: i32 },

    /// A utilization value that does not fit the 2-digit field with its
    /// hundreds-LED pair.
    #[error("utilization {value} cannot be shown on the 2-digit field (must be < 200)")]
    UsageOutOfRange { value: i32 },

    /// Segment encoding failed (digit outside the mask table).
    #[error(transparent)]
    Codec(#[from] segment_codec::CodecError),

    /// The HID subsystem could not be initialized.
    #[error("HID subsystem error: {0}")]
    Hid(String),

    /// A report write to the open device failed.
    #[error("device write failed: {0}")]
    WriteFailed(String),
}

impl From<hidapi::HidError> for PanelError {
    fn from(err: hidapi::HidError) -> Self {
        Self::Hid(err.to_string())
    }
}
