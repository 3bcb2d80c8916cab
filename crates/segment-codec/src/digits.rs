// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Decimal digit decomposition and segment flattening.

use crate::{CodecError, DIGIT_MASKS};

/// Decomposes a value into exactly `length` base-10 digits.
///
/// - A negative `value` means "no data": the result is `length` copies of
///   `fill` (typically [`BLANK`](crate::BLANK), rendering an empty field).
/// - A value with fewer digits than `length` is left-padded with `fill`,
///   so `57` in a 3-digit field shows as `" 57"` rather than `"057"` when
///   the fill is the blank sentinel.
/// - A value with more digits than `length` keeps only its `length`
///   trailing (least-significant) digits. Callers guard their fields with
///   explicit domain checks, so this branch is unreachable for well-formed
///   input.
pub fn digits_of(value: i32, length: usize, fill: u8) -> Vec<u8> {
    if value < 0 {
        return vec![fill; length];
    }

    let mut digits = Vec::with_capacity(length);
    let mut rest = value as u32;
    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    // Digits were collected least-significant first.
    digits.reverse();

    if digits.len() < length {
        let mut padded = vec![fill; length - digits.len()];
        padded.extend_from_slice(&digits);
        padded
    } else {
        digits.split_off(digits.len() - length)
    }
}

/// Maps a digit sequence through the mask table and flattens the result
/// into one segment-state vector of `7 * digits.len()` entries.
///
/// Each entry must be a digit `0..=9` or the blank sentinel `10`.
pub fn segments_for(digits: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut segments = Vec::with_capacity(digits.len() * crate::SEGMENTS_PER_DIGIT);
    for &digit in digits {
        let row = DIGIT_MASKS
            .get(digit as usize)
            .ok_or(CodecError::InvalidDigit { value: digit })?;
        segments.extend_from_slice(row);
    }
    Ok(segments)
}
