// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for color parsing.

/// Errors that can occur when parsing color specifications.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    /// A color string that is not six hex digits.
    #[error("invalid hex color '{input}': expected six hex digits")]
    InvalidHex { input: String },

    /// A gradient spec with more than three dash-separated parts.
    #[error("invalid gradient spec '{input}': expected 'start-end' or 'start-end-key'")]
    InvalidGradient { input: String },
}
