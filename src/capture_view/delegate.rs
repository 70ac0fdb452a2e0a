// SPDX-License-Identifier: MPL-2.0

//! Capture view notifications

use super::CaptureMode;
use super::timer::TimerReading;
use cosmic::iced::Point;

/// Receiver of capture view events
///
/// Every method has an empty default, so implementors only override the
/// events they care about. Tap points are in view coordinates.
pub trait CaptureViewDelegate {
    fn timer_started(&mut self) {}

    /// Called on every timer tick with the session's recorded duration
    fn timer_updated(&mut self, _reading: TimerReading) {}

    /// Called once when the timer stops, with the final reading
    fn timer_stopped(&mut self, _reading: TimerReading) {}

    fn tapped_to_focus(&mut self, _point: Point) {}

    fn tapped_to_expose(&mut self, _point: Point) {}

    fn tapped_to_reset(&mut self, _point: Point) {}

    fn flash_pressed(&mut self) {}

    fn switch_cameras_pressed(&mut self) {}

    /// Called after the capture button's action ran, with the mode it ran in
    fn capture_pressed(&mut self, _mode: CaptureMode) {}

    fn camera_mode_pressed(&mut self) {}

    fn video_mode_pressed(&mut self) {}
}
