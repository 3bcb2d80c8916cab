// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The per-tick mode scheduler.
//!
//! A pure selector with no state of its own: every tick it is handed the
//! frame, the config snapshot, the metrics sample, the tick counter, and
//! the wall clock, and fills the LED and color buffers according to the
//! active display mode. Alternating modes switch on the tick counter,
//! which wraps at twice the cycle length.
//!
//! Domain limits live here, at the numeric call sites: a temperature must
//! fit the 3-digit field (`< 1000`) and a big-layout utilization must fit
//! the 2-digit field with its hundreds-LED pair (`< 200`). Violations are
//! provider bugs and abort the run.

use crate::{DisplayMode, ModeChoice, PanelError, Snapshot};
use color_engine::{resolve, ResolveContext, Rgb, WallClock, DEFAULT_COLOR};
use metrics_probe::{MetricsSample, TempUnit, TempUnits};
use panel_proto::{FrameBuffer, Layout, PANEL_LED_COUNT};
use segment_codec::{digits_of, letter_segments, segments_for, CodecError, BLANK};
use std::collections::HashMap;

/// The two monitored devices and their key prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Device {
    Cpu,
    Gpu,
}

impl Device {
    fn name(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
        }
    }

    fn key(self, suffix: &str) -> String {
        format!("{}_{suffix}", self.name())
    }

    fn temp(self, sample: &MetricsSample) -> Option<f64> {
        match self {
            Self::Cpu => sample.cpu_temp,
            Self::Gpu => sample.gpu_temp,
        }
    }

    fn usage(self, sample: &MetricsSample) -> Option<f64> {
        match self {
            Self::Cpu => sample.cpu_usage,
            Self::Gpu => sample.gpu_usage,
        }
    }

    fn unit(self, units: TempUnits) -> TempUnit {
        match self {
            Self::Cpu => units.cpu,
            Self::Gpu => units.gpu,
        }
    }
}

/// Both configured palettes, resolved to concrete colors for this tick.
pub struct ResolvedPalettes {
    pub metrics: [Rgb; PANEL_LED_COUNT],
    pub time: [Rgb; PANEL_LED_COUNT],
}

/// Resolves the "metrics" and "time" palettes once for this cycle.
pub fn resolve_palettes(
    snap: &Snapshot,
    sample: &MetricsSample,
    tick: u32,
    clock: WallClock,
) -> ResolvedPalettes {
    let mut values = HashMap::new();
    for key in ["cpu_temp", "gpu_temp", "cpu_usage", "gpu_usage"] {
        if let Some(value) = sample.get(key) {
            values.insert(key.to_string(), value);
        }
    }
    let ctx = ResolveContext {
        tick,
        cycle_ticks: snap.cycle_ticks,
        clock,
        metrics: &values,
        ranges: &snap.ranges,
    };
    ResolvedPalettes {
        metrics: resolve_specs(&snap.metrics_palette, &ctx),
        time: resolve_specs(&snap.time_palette, &ctx),
    }
}

fn resolve_specs(
    specs: &[color_engine::ColorSpec],
    ctx: &ResolveContext<'_>,
) -> [Rgb; PANEL_LED_COUNT] {
    let mut colors = [DEFAULT_COLOR; PANEL_LED_COUNT];
    for (slot, spec) in colors.iter_mut().zip(specs) {
        *slot = resolve(spec, ctx);
    }
    colors
}

/// Fills the frame for this tick according to the snapshot's mode.
///
/// The frame must already be cleared for the cycle. An unrecognized mode
/// name logs a warning and leaves the frame blank; the out-of-range
/// numeric conditions are the only errors.
pub fn render(
    frame: &mut FrameBuffer,
    snap: &Snapshot,
    sample: &MetricsSample,
    tick: u32,
    clock: WallClock,
) -> Result<(), PanelError> {
    let mode = match &snap.mode {
        ModeChoice::Recognized(mode) => *mode,
        ModeChoice::Unrecognized(name) => {
            tracing::warn!("unknown display mode '{name}', rendering blank frame");
            return Ok(());
        }
    };
    let palettes = resolve_palettes(snap, sample, tick, clock);
    let cycle = snap.cycle_ticks;

    match mode {
        DisplayMode::Metrics => {
            render_metrics(frame, &[Device::Cpu, Device::Gpu], snap, sample, &palettes)?;
        }
        DisplayMode::Time => render_time_with_seconds(frame, clock, &palettes)?,
        DisplayMode::TimeCpu => {
            render_time(frame, Device::Gpu, clock, &palettes)?;
            render_metrics(frame, &[Device::Cpu], snap, sample, &palettes)?;
        }
        DisplayMode::TimeGpu => {
            render_time(frame, Device::Cpu, clock, &palettes)?;
            render_metrics(frame, &[Device::Gpu], snap, sample, &palettes)?;
        }
        DisplayMode::AlternateTime => {
            if tick < cycle {
                render_time(frame, Device::Cpu, clock, &palettes)?;
                render_metrics(frame, &[Device::Gpu], snap, sample, &palettes)?;
            } else {
                render_time(frame, Device::Gpu, clock, &palettes)?;
                render_metrics(frame, &[Device::Cpu], snap, sample, &palettes)?;
            }
        }
        DisplayMode::AlternateTimeWithSeconds => {
            if tick < cycle {
                render_time_with_seconds(frame, clock, &palettes)?;
            } else {
                render_metrics(frame, &[Device::Cpu, Device::Gpu], snap, sample, &palettes)?;
            }
        }
        DisplayMode::AlternateMetrics => {
            // Quarter-cycle rotation over the doubled tick range.
            if tick < cycle / 2 {
                render_temp_small(frame, Device::Cpu, snap, sample, &palettes)?;
            } else if tick < cycle {
                render_temp_small(frame, Device::Gpu, snap, sample, &palettes)?;
            } else if tick < 3 * cycle / 2 {
                render_usage_small(frame, Device::Cpu, sample, &palettes)?;
            } else {
                render_usage_small(frame, Device::Gpu, sample, &palettes)?;
            }
        }
        DisplayMode::CpuTemp => render_temp_small(frame, Device::Cpu, snap, sample, &palettes)?,
        DisplayMode::GpuTemp => render_temp_small(frame, Device::Gpu, snap, sample, &palettes)?,
        DisplayMode::CpuUsage => render_usage_small(frame, Device::Cpu, sample, &palettes)?,
        DisplayMode::GpuUsage => render_usage_small(frame, Device::Gpu, sample, &palettes)?,
        DisplayMode::DebugUi => {
            frame.set_all(1);
            frame.paint_all(&palettes.metrics);
        }
    }
    Ok(())
}

/// Fills the frame with the digit test pattern used by `--test` mode:
/// the repeated-digit sequence advances every 2 seconds, and the small
/// layout rotates its presentation every 4 seconds.
pub fn render_digit_demo(
    frame: &mut FrameBuffer,
    snap: &Snapshot,
    sample: &MetricsSample,
    tick: u32,
    clock: WallClock,
    epoch_secs: u64,
) -> Result<(), PanelError> {
    let palettes = resolve_palettes(snap, sample, tick, clock);
    let digit = (epoch_secs / 2 % 9 + 1) as i32; // 1-9
    let number = digit * 111; // 111, 222, ... 999

    match snap.layout {
        Layout::Small => {
            let phase = epoch_secs / 4 % 4;
            let device = if phase % 2 == 0 { Device::Cpu } else { Device::Gpu };
            frame.fill_group(&device.key("led"), 1);
            if phase < 2 {
                frame.fill_group("celsius", 1);
            } else {
                frame.fill_group("percent_led", 1);
            }
            let segments = segments_for(&digits_of(number, 3, BLANK))?;
            frame.write_group("digit_frame", &segments);
            frame.paint_all(&palettes.metrics);
        }
        Layout::Big => {
            for device in [Device::Cpu, Device::Gpu] {
                frame.fill_group(&device.key("led"), 1);
                set_temp(frame, device, number, TempUnit::Celsius)?;
                set_usage(frame, device, digit * 11)?;
                frame.paint_group(device.name(), &palettes.metrics);
            }
        }
    }
    Ok(())
}

// ── Big-layout field writers ───────────────────────────────────

fn set_temp(
    frame: &mut FrameBuffer,
    device: Device,
    value: i32,
    unit: TempUnit,
) -> Result<(), PanelError> {
    if value >= 1000 {
        return Err(PanelError::TemperatureOutOfRange { value });
    }
    let segments = segments_for(&digits_of(value, 3, BLANK))?;
    frame.write_group(&device.key("temp"), &segments);
    let unit_key = match unit {
        TempUnit::Celsius => "celsius",
        TempUnit::Fahrenheit => "fahrenheit",
    };
    frame.fill_group(&device.key(unit_key), 1);
    Ok(())
}

fn set_usage(frame: &mut FrameBuffer, device: Device, value: i32) -> Result<(), PanelError> {
    if value >= 200 {
        return Err(PanelError::UsageOutOfRange { value });
    }
    // The shared hundreds pair lights for 100-199.
    let hundreds = u8::from(value >= 100);
    let mut leds = vec![hundreds; 2];
    leds.extend(segments_for(&digits_of(value, 2, BLANK))?);
    frame.write_group(&device.key("usage"), &leds);
    frame.fill_group(&device.key("percent_led"), 1);
    Ok(())
}

fn render_metrics(
    frame: &mut FrameBuffer,
    devices: &[Device],
    snap: &Snapshot,
    sample: &MetricsSample,
    palettes: &ResolvedPalettes,
) -> Result<(), PanelError> {
    for &device in devices {
        frame.fill_group(&device.key("led"), 1);
        set_temp(
            frame,
            device,
            MetricsSample::display_value(device.temp(sample)),
            device.unit(snap.units),
        )?;
        set_usage(frame, device, MetricsSample::display_value(device.usage(sample)))?;
        frame.paint_group(device.name(), &palettes.metrics);
    }
    Ok(())
}

// ── Clock rendering ────────────────────────────────────────────

fn hour_field(clock: WallClock) -> Result<Vec<u8>, PanelError> {
    let mut field = segments_for(&digits_of(clock.hour as i32, 2, 0))?;
    let suffix =
        letter_segments('H').ok_or(CodecError::UnknownLetter { letter: 'H' })?;
    field.extend_from_slice(&suffix);
    Ok(field)
}

fn two_digit_field(value: u32) -> Result<Vec<u8>, PanelError> {
    // The usage field's leading hundreds pair stays dark for clock digits.
    let mut field = vec![0u8; 2];
    field.extend(segments_for(&digits_of(value as i32, 2, 0))?);
    Ok(field)
}

fn render_time(
    frame: &mut FrameBuffer,
    device: Device,
    clock: WallClock,
    palettes: &ResolvedPalettes,
) -> Result<(), PanelError> {
    frame.write_group(&device.key("temp"), &hour_field(clock)?);
    frame.write_group(&device.key("usage"), &two_digit_field(clock.minute)?);
    frame.paint_group(device.name(), &palettes.time);
    Ok(())
}

fn render_time_with_seconds(
    frame: &mut FrameBuffer,
    clock: WallClock,
    palettes: &ResolvedPalettes,
) -> Result<(), PanelError> {
    frame.write_group("cpu_temp", &hour_field(clock)?);
    frame.write_group("cpu_usage", &two_digit_field(clock.minute)?);
    frame.write_group("gpu_usage", &two_digit_field(clock.second)?);
    frame.paint_all(&palettes.time);
    Ok(())
}

// ── Small-layout rendering ─────────────────────────────────────

fn render_temp_small(
    frame: &mut FrameBuffer,
    device: Device,
    snap: &Snapshot,
    sample: &MetricsSample,
    palettes: &ResolvedPalettes,
) -> Result<(), PanelError> {
    let unit_key = match device.unit(snap.units) {
        TempUnit::Celsius => "celsius",
        TempUnit::Fahrenheit => "fahrenheit",
    };
    frame.fill_group(unit_key, 1);
    frame.fill_group(&device.key("led"), 1);
    frame.paint_all(&palettes.metrics);
    match device.temp(sample) {
        Some(value) => {
            let digits = digits_of(MetricsSample::display_value(Some(value)), 3, BLANK);
            frame.write_group("digit_frame", &segments_for(&digits)?);
        }
        None => tracing::warn!("{} temperature not available", device.name()),
    }
    Ok(())
}

fn render_usage_small(
    frame: &mut FrameBuffer,
    device: Device,
    sample: &MetricsSample,
    palettes: &ResolvedPalettes,
) -> Result<(), PanelError> {
    frame.fill_group("percent_led", 1);
    frame.fill_group(&device.key("led"), 1);
    frame.paint_all(&palettes.metrics);
    match device.usage(sample) {
        Some(value) => {
            // The shared 3-digit frame fits 100% without a hundreds pair.
            let digits = digits_of(MetricsSample::display_value(Some(value)), 3, BLANK);
            frame.write_group("digit_frame", &segments_for(&digits)?);
        }
        None => tracing::warn!("{} usage not available", device.name()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayMode, ModeChoice};
    use panel_proto::span;
    use segment_codec::DIGIT_MASKS;

    fn sample() -> MetricsSample {
        MetricsSample {
            cpu_temp: Some(57.0),
            gpu_temp: Some(62.0),
            cpu_usage: Some(42.0),
            gpu_usage: Some(100.0),
        }
    }

    fn snapshot(mode: DisplayMode, layout: Layout) -> Snapshot {
        let mut snap = Snapshot::default();
        snap.layout = layout;
        snap.mode = ModeChoice::Recognized(mode);
        snap
    }

    fn group<'a>(frame: &'a FrameBuffer, layout: Layout, key: &str) -> &'a [u8] {
        &frame.leds()[span(layout, key).unwrap()]
    }

    #[test]
    fn test_metrics_mode_lights_device_leds() {
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();

        assert_eq!(group(&frame, Layout::Big, "cpu_led"), &[1]);
        assert_eq!(group(&frame, Layout::Big, "gpu_led"), &[1]);
        assert_eq!(group(&frame, Layout::Big, "cpu_percent_led"), &[1]);
        assert_eq!(group(&frame, Layout::Big, "cpu_celsius"), &[1]);
        assert_eq!(group(&frame, Layout::Big, "cpu_fahrenheit"), &[0]);
    }

    #[test]
    fn test_metrics_mode_temp_digits() {
        // cpu_temp 57 in a 3-digit field: blank + "5" + "7".
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();

        let temp = group(&frame, Layout::Big, "cpu_temp");
        assert_eq!(&temp[0..7], &DIGIT_MASKS[10]);
        assert_eq!(&temp[7..14], &DIGIT_MASKS[5]);
        assert_eq!(&temp[14..21], &DIGIT_MASKS[7]);
    }

    #[test]
    fn test_hundreds_pair() {
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();

        // cpu_usage 42: hundreds pair dark. gpu_usage 100: lit.
        assert_eq!(&group(&frame, Layout::Big, "cpu_usage")[0..2], &[0, 0]);
        assert_eq!(&group(&frame, Layout::Big, "gpu_usage")[0..2], &[1, 1]);
    }

    #[test]
    fn test_usage_199_is_ok_200_is_fatal() {
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);

        let mut ok = sample();
        ok.cpu_usage = Some(199.0);
        render(&mut frame, &snap, &ok, 0, WallClock::default()).unwrap();

        let mut bad = sample();
        bad.cpu_usage = Some(200.0);
        frame.reset(Layout::Big);
        assert!(matches!(
            render(&mut frame, &snap, &bad, 0, WallClock::default()),
            Err(PanelError::UsageOutOfRange { value: 200 })
        ));
    }

    #[test]
    fn test_temp_999_is_ok_1000_is_fatal() {
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);

        let mut ok = sample();
        ok.cpu_temp = Some(999.0);
        render(&mut frame, &snap, &ok, 0, WallClock::default()).unwrap();

        let mut bad = sample();
        bad.cpu_temp = Some(1000.0);
        frame.reset(Layout::Big);
        assert!(matches!(
            render(&mut frame, &snap, &bad, 0, WallClock::default()),
            Err(PanelError::TemperatureOutOfRange { value: 1000 })
        ));
    }

    #[test]
    fn test_missing_metric_renders_blank_field() {
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        let mut s = sample();
        s.gpu_temp = None;
        render(&mut frame, &snap, &s, 0, WallClock::default()).unwrap();

        let temp = group(&frame, Layout::Big, "gpu_temp");
        assert!(temp.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_unrecognized_mode_renders_blank() {
        let mut snap = Snapshot::default();
        snap.mode = ModeChoice::Unrecognized("disco".to_string());
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();
        assert!(frame.leds().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_time_mode_renders_clock() {
        let snap = snapshot(DisplayMode::Time, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        let clock = WallClock { hour: 13, minute: 45, second: 9 };
        render(&mut frame, &snap, &sample(), 0, clock).unwrap();

        let temp = group(&frame, Layout::Big, "cpu_temp");
        assert_eq!(&temp[0..7], &DIGIT_MASKS[1]);
        assert_eq!(&temp[7..14], &DIGIT_MASKS[3]);
        assert_eq!(&temp[14..21], &letter_segments('H').unwrap());

        // Minutes on the cpu usage field, seconds on the gpu usage field,
        // hundreds pairs dark.
        let minutes = group(&frame, Layout::Big, "cpu_usage");
        assert_eq!(&minutes[0..2], &[0, 0]);
        assert_eq!(&minutes[2..9], &DIGIT_MASKS[4]);
        assert_eq!(&minutes[9..16], &DIGIT_MASKS[5]);
        let seconds = group(&frame, Layout::Big, "gpu_usage");
        assert_eq!(&seconds[2..9], &DIGIT_MASKS[0]);
        assert_eq!(&seconds[9..16], &DIGIT_MASKS[9]);
    }

    #[test]
    fn test_time_pads_hours_with_zero() {
        let snap = snapshot(DisplayMode::Time, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        let clock = WallClock { hour: 7, minute: 0, second: 0 };
        render(&mut frame, &snap, &sample(), 0, clock).unwrap();

        // "07", not " 7": the clock uses a zero fill.
        let temp = group(&frame, Layout::Big, "cpu_temp");
        assert_eq!(&temp[0..7], &DIGIT_MASKS[0]);
        assert_eq!(&temp[7..14], &DIGIT_MASKS[7]);
    }

    #[test]
    fn test_alternate_time_swaps_halves() {
        let snap = snapshot(DisplayMode::AlternateTime, Layout::Big);
        let clock = WallClock { hour: 12, minute: 30, second: 0 };

        // First half-period: clock on the cpu fields.
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, clock).unwrap();
        assert_eq!(
            &group(&frame, Layout::Big, "cpu_temp")[14..21],
            &letter_segments('H').unwrap()
        );
        assert_eq!(group(&frame, Layout::Big, "gpu_led"), &[1]);

        // Second half-period: roles swap.
        frame.reset(Layout::Big);
        render(&mut frame, &snap, &sample(), snap.cycle_ticks, clock).unwrap();
        assert_eq!(
            &group(&frame, Layout::Big, "gpu_temp")[14..21],
            &letter_segments('H').unwrap()
        );
        assert_eq!(group(&frame, Layout::Big, "cpu_led"), &[1]);
    }

    #[test]
    fn test_alternate_metrics_rotation() {
        let snap = snapshot(DisplayMode::AlternateMetrics, Layout::Small);
        let cycle = snap.cycle_ticks;
        let s = sample();

        // Quarter boundaries: cpu temp, gpu temp, cpu usage, gpu usage.
        let expectations = [
            (0, "cpu_led", "celsius"),
            (cycle / 2, "gpu_led", "celsius"),
            (cycle, "cpu_led", "percent_led"),
            (3 * cycle / 2, "gpu_led", "percent_led"),
        ];
        for (tick, device_led, annotation) in expectations {
            let mut frame = FrameBuffer::new(Layout::Small);
            render(&mut frame, &snap, &s, tick, WallClock::default()).unwrap();
            assert_eq!(group(&frame, Layout::Small, device_led), &[1], "tick {tick}");
            assert_eq!(group(&frame, Layout::Small, annotation), &[1], "tick {tick}");
        }
    }

    #[test]
    fn test_small_usage_100_fits_three_digits() {
        let snap = snapshot(DisplayMode::GpuUsage, Layout::Small);
        let mut frame = FrameBuffer::new(Layout::Small);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();

        let digits = group(&frame, Layout::Small, "digit_frame");
        assert_eq!(&digits[0..7], &DIGIT_MASKS[1]);
        assert_eq!(&digits[7..14], &DIGIT_MASKS[0]);
        assert_eq!(&digits[14..21], &DIGIT_MASKS[0]);
    }

    #[test]
    fn test_debug_ui_lights_everything() {
        let snap = snapshot(DisplayMode::DebugUi, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();
        assert!(frame.leds().iter().all(|&v| v == 1));
    }

    #[test]
    fn test_demo_big_layout() {
        let snap = snapshot(DisplayMode::Metrics, Layout::Big);
        let mut frame = FrameBuffer::new(Layout::Big);
        // epoch 0: digit 1, number 111 on both temp fields, 11 on usage.
        render_digit_demo(&mut frame, &snap, &sample(), 0, WallClock::default(), 0).unwrap();

        for device in ["cpu", "gpu"] {
            let temp = group(&frame, Layout::Big, &format!("{device}_temp"));
            for digit in 0..3 {
                assert_eq!(&temp[digit * 7..(digit + 1) * 7], &DIGIT_MASKS[1]);
            }
        }
    }

    #[test]
    fn test_demo_small_layout_phases() {
        let snap = snapshot(DisplayMode::AlternateMetrics, Layout::Small);
        let mut frame = FrameBuffer::new(Layout::Small);
        // Phase 0 (epoch 0): cpu + temperature presentation.
        render_digit_demo(&mut frame, &snap, &sample(), 0, WallClock::default(), 0).unwrap();
        assert_eq!(group(&frame, Layout::Small, "cpu_led"), &[1]);
        assert_eq!(group(&frame, Layout::Small, "celsius"), &[1]);

        // Phase 3 (epoch 12): gpu + usage presentation.
        frame.reset(Layout::Small);
        render_digit_demo(&mut frame, &snap, &sample(), 0, WallClock::default(), 12).unwrap();
        assert_eq!(group(&frame, Layout::Small, "gpu_led"), &[1]);
        assert_eq!(group(&frame, Layout::Small, "percent_led"), &[1]);
    }

    #[test]
    fn test_palettes_paint_device_halves() {
        let mut snap = snapshot(DisplayMode::Metrics, Layout::Big);
        snap.metrics_palette =
            vec![color_engine::ColorSpec::Literal(Rgb { r: 9, g: 9, b: 9 }); 100];
        let mut frame = FrameBuffer::new(Layout::Big);
        render(&mut frame, &snap, &sample(), 0, WallClock::default()).unwrap();
        assert!(frame.colors().iter().all(|&c| c == Rgb { r: 9, g: 9, b: 9 }));
    }
}
