// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Segment mask tables for digits and letters.
//!
//! Masks are the device's glyph set: each row lists which of the seven
//! segments are lit, in the order top, top-right, bottom-right, bottom,
//! bottom-left, top-left, middle.

/// Number of segments in one 7-segment digit.
pub const SEGMENTS_PER_DIGIT: usize = 7;

/// Fill sentinel that maps to the all-off "blank" row.
pub const BLANK: u8 = 10;

/// Segment masks for digits 0-9 plus the blank row at index [`BLANK`].
pub const DIGIT_MASKS: [[u8; SEGMENTS_PER_DIGIT]; 11] = [
    [1, 1, 1, 0, 1, 1, 1], // 0
    [0, 0, 1, 0, 0, 0, 1], // 1
    [0, 1, 1, 1, 1, 1, 0], // 2
    [0, 1, 1, 1, 0, 1, 1], // 3
    [1, 0, 1, 1, 0, 0, 1], // 4
    [1, 1, 0, 1, 0, 1, 1], // 5
    [1, 1, 0, 1, 1, 1, 1], // 6
    [0, 1, 1, 0, 0, 0, 1], // 7
    [1, 1, 1, 1, 1, 1, 1], // 8
    [1, 1, 1, 1, 0, 1, 1], // 9
    [0, 0, 0, 0, 0, 0, 0], // blank
];

/// Returns the segment mask for a letter, if the panel can draw it.
///
/// The alphabet is deliberately tiny: only `'H'` is needed today, as the
/// suffix glyph marking the hour field of the clock display.
pub fn letter_segments(letter: char) -> Option<[u8; SEGMENTS_PER_DIGIT]> {
    match letter {
        'H' => Some([1, 0, 1, 1, 1, 0, 1]),
        _ => None,
    }
}
