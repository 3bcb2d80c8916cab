// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # panel-proto
//!
//! The panel's data model and wire protocol:
//!
//! - [`Layout`] and the semantic index maps: which LED positions a key
//!   like `cpu_temp` or `digit_frame` addresses, for the full ("big") and
//!   reduced ("small") physical arrangements.
//! - [`FrameBuffer`]: the per-LED intensity buffer and its parallel color
//!   buffer, written through semantic keys.
//! - The packet framer: serializes one frame into exactly five HID output
//!   reports with a byte-exact fixed header.
//!
//! The panel always receives the full [`PANEL_LED_COUNT`]-LED frame; the
//! layouts differ only in which positions their index maps address and
//! which display modes they support.

mod frame;
mod layout;
mod packet;

pub use frame::FrameBuffer;
pub use layout::{span, Layout, PANEL_LED_COUNT};
pub use packet::{frame_packets, FRAME_HEADER, PACKETS_PER_FRAME, REPORT_LEN};
