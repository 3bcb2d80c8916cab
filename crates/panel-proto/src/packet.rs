// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Serializes a frame into the device's HID output reports.
//!
//! The protocol is a fixed contract with the panel firmware:
//!
//! - The payload is one 3-byte color per LED, in panel index order, with
//!   an off LED contributing `00 00 00` regardless of its color.
//! - Report 0 carries the 20-byte header followed by the first 44 payload
//!   bytes (64 bytes total).
//! - Reports 1-4 each carry a single `00` marker byte followed by the next
//!   64-byte payload slice (65 bytes total).
//!
//! Any deviation in offsets or header content renders garbage or is
//! rejected by the device outright.

use crate::{FrameBuffer, PANEL_LED_COUNT};

/// Fixed protocol header opening report 0.
pub const FRAME_HEADER: [u8; 20] = [
    0xda, 0xdb, 0xdc, 0xdd, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xfc, 0x00, 0x00, 0xff,
];

/// Payload bytes per follow-up report.
pub const REPORT_LEN: usize = 64;

/// Reports written per frame.
pub const PACKETS_PER_FRAME: usize = 5;

/// Payload bytes carried by report 0 after the header.
const FIRST_SLICE: usize = REPORT_LEN - FRAME_HEADER.len();

/// Serializes one frame into its five wire reports.
///
/// Report lengths and header bytes are constant for every possible frame
/// content.
pub fn frame_packets(frame: &FrameBuffer) -> Vec<Vec<u8>> {
    let mut payload = Vec::with_capacity(PANEL_LED_COUNT * 3);
    for (led, color) in frame.leds().iter().zip(frame.colors()) {
        if *led != 0 {
            payload.extend_from_slice(&color.bytes());
        } else {
            payload.extend_from_slice(&[0, 0, 0]);
        }
    }

    let mut packets = Vec::with_capacity(PACKETS_PER_FRAME);

    let mut first = Vec::with_capacity(REPORT_LEN);
    first.extend_from_slice(&FRAME_HEADER);
    first.extend_from_slice(&payload[..FIRST_SLICE]);
    packets.push(first);

    for chunk in payload[FIRST_SLICE..].chunks(REPORT_LEN) {
        let mut packet = Vec::with_capacity(1 + REPORT_LEN);
        packet.push(0x00);
        packet.extend_from_slice(chunk);
        packets.push(packet);
    }

    packets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    #[test]
    fn test_payload_splits_exactly() {
        // 100 LEDs * 3 bytes = 44 + 4 * 64: the slicing leaves no remainder.
        assert_eq!(PANEL_LED_COUNT * 3, FIRST_SLICE + 4 * REPORT_LEN);
    }

    #[test]
    fn test_packet_count_and_lengths() {
        let frame = FrameBuffer::new(Layout::Big);
        let packets = frame_packets(&frame);
        assert_eq!(packets.len(), PACKETS_PER_FRAME);
        assert_eq!(packets[0].len(), 64);
        for packet in &packets[1..] {
            assert_eq!(packet.len(), 65);
        }
    }

    #[test]
    fn test_header_is_byte_identical_across_frames() {
        let blank = FrameBuffer::new(Layout::Big);
        let mut lit = FrameBuffer::new(Layout::Big);
        lit.set_all(1);

        let a = frame_packets(&blank);
        let b = frame_packets(&lit);
        assert_eq!(&a[0][..FRAME_HEADER.len()], &FRAME_HEADER);
        assert_eq!(&b[0][..FRAME_HEADER.len()], &FRAME_HEADER);
        assert_eq!(a[0].len(), b[0].len());
    }

    #[test]
    fn test_off_led_contributes_zero_bytes() {
        // All LEDs off: every payload byte after the header is zero, no
        // matter what colors the buffer holds.
        let frame = FrameBuffer::new(Layout::Big);
        let packets = frame_packets(&frame);
        assert!(packets[0][FRAME_HEADER.len()..].iter().all(|&b| b == 0));
        for packet in &packets[1..] {
            assert!(packet.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_lit_led_carries_its_color() {
        let mut frame = FrameBuffer::new(Layout::Big);
        // LED 0 is cpu_led; default color is ffe000.
        frame.fill_group("cpu_led", 1);
        let packets = frame_packets(&frame);
        let payload0 = &packets[0][FRAME_HEADER.len()..];
        assert_eq!(&payload0[0..3], &[0xff, 0xe0, 0x00]);
        assert_eq!(&payload0[3..6], &[0, 0, 0]);
    }

    #[test]
    fn test_follow_up_packets_have_marker() {
        let mut frame = FrameBuffer::new(Layout::Big);
        frame.set_all(1);
        let packets = frame_packets(&frame);
        for packet in &packets[1..] {
            assert_eq!(packet[0], 0x00);
            // With every LED lit the default color fills the slice.
            assert!(packet[1..].iter().any(|&b| b != 0));
        }
    }
}
