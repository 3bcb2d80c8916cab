// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for segment encoding.

/// Errors that can occur when encoding digits into segment vectors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A digit value outside `0..=10` was passed to the mask table.
    #[error("digit value {value} has no segment mask (expected 0-9 or the blank sentinel 10)")]
    InvalidDigit { value: u8 },

    /// A letter with no entry in the letter-mask table.
    #[error("letter '{letter}' has no segment mask")]
    UnknownLetter { letter: char },
}
