// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # segment-codec
//!
//! Converts integers and digit sequences into the per-segment on/off
//! vectors a 7-segment-style LED panel understands.
//!
//! The panel renders each decimal digit with seven segments, in the fixed
//! order: top, top-right, bottom-right, bottom, bottom-left, top-left,
//! middle. A digit field of width `n` therefore occupies `7 * n`
//! consecutive LED positions.
//!
//! # Example
//! ```
//! use segment_codec::{digits_of, segments_for, BLANK};
//!
//! // 57 in a 3-digit field, blank-padded: " 57"
//! let digits = digits_of(57, 3, BLANK);
//! assert_eq!(digits, vec![BLANK, 5, 7]);
//! let segments = segments_for(&digits).unwrap();
//! assert_eq!(segments.len(), 21);
//! ```

mod digits;
mod error;
mod mask;

pub use digits::{digits_of, segments_for};
pub use error::CodecError;
pub use mask::{letter_segments, DIGIT_MASKS, BLANK, SEGMENTS_PER_DIGIT};
