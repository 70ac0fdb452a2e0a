// SPDX-License-Identifier: MPL-2.0

//! Camera session and preview surface abstraction
//!
//! The capture view never talks to camera hardware directly. Everything it
//! needs from the camera stack is expressed by two collaborators:
//!
//! ```text
//! ┌─────────────────────┐
//! │     CaptureView     │
//! └─────┬─────────┬─────┘
//!       │         │
//!       ▼         ▼
//! ┌───────────┐ ┌────────────────┐
//! │  Camera   │ │ PreviewSurface │  ← view ⇄ point-of-interest mapping
//! │  Session  │ └────────────────┘
//! └───────────┘  ← capture, recording, focus/exposure commands
//! ```
//!
//! Commands are fire-and-forget: a session is expected to run capture work
//! on its own threads and report failures through its own channels.

pub mod preview;
pub mod simulated;

pub use preview::{LetterboxPreview, VideoContentFit};
pub use simulated::SimulatedSession;

use crate::errors::SessionResult;
use cosmic::Element;
use cosmic::iced::{Point, Size};
use std::time::Duration;

/// Orientation of the recorded/previewed video relative to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoOrientation {
    /// Sensor-native landscape, no rotation
    #[default]
    LandscapeRight,
    /// Landscape rotated by 180°
    LandscapeLeft,
    /// Portrait, sensor rotated 90° clockwise
    Portrait,
    /// Portrait, sensor rotated 90° counter-clockwise
    PortraitUpsideDown,
}

impl VideoOrientation {
    /// Rotate a normalized view-space point into sensor space
    pub fn view_to_device(self, point: Point) -> Point {
        let (u, v) = (point.x, point.y);
        match self {
            VideoOrientation::LandscapeRight => Point::new(u, v),
            VideoOrientation::LandscapeLeft => Point::new(1.0 - u, 1.0 - v),
            VideoOrientation::Portrait => Point::new(v, 1.0 - u),
            VideoOrientation::PortraitUpsideDown => Point::new(1.0 - v, u),
        }
    }

    /// Inverse of [`Self::view_to_device`]
    pub fn device_to_view(self, point: Point) -> Point {
        let (x, y) = (point.x, point.y);
        match self {
            VideoOrientation::LandscapeRight => Point::new(x, y),
            VideoOrientation::LandscapeLeft => Point::new(1.0 - x, 1.0 - y),
            VideoOrientation::Portrait => Point::new(1.0 - y, x),
            VideoOrientation::PortraitUpsideDown => Point::new(y, 1.0 - x),
        }
    }
}

/// Camera session consumed by the capture view
pub trait CameraSession {
    // ===== Lifecycle =====

    /// Start streaming frames to the preview surface
    fn start_session(&mut self) -> SessionResult<()>;

    /// Switch to the next available camera device
    fn switch_cameras(&mut self);

    // ===== Capture =====

    /// Capture a still image with the current settings
    fn capture_still_image(&mut self);

    /// Start recording a video
    fn start_recording(&mut self);

    /// Stop the active recording
    fn stop_recording(&mut self);

    /// Whether a recording is in progress
    fn is_recording(&self) -> bool;

    /// Authoritative duration of the active recording
    fn recorded_duration(&self) -> Duration;

    /// Orientation the preview connection should use
    fn current_video_orientation(&self) -> VideoOrientation;

    // ===== Focus & exposure =====

    /// Whether the active device can focus on a point of interest
    fn supports_tap_to_focus(&self) -> bool;

    /// Whether the active device can meter exposure on a point of interest
    fn supports_tap_to_expose(&self) -> bool;

    /// Focus on a normalized device point of interest
    fn focus_at_point(&mut self, point: Point);

    /// Meter exposure on a normalized device point of interest
    fn expose_at_point(&mut self, point: Point);

    /// Return focus and exposure to continuous automatic modes
    fn reset_focus_and_exposure_modes(&mut self);
}

/// Surface displaying the session's preview frames
///
/// Owns the mapping between view coordinates (logical pixels relative to
/// the capture view) and normalized device points of interest.
pub trait PreviewSurface {
    /// Convert a view point into a device point of interest
    fn capture_device_point_of_interest(&self, view_point: Point) -> Point;

    /// Convert a device point of interest into a view point
    fn point_for_capture_device_point_of_interest(&self, device_point: Point) -> Point;

    /// Update the size the surface is laid out at
    fn set_viewport(&mut self, size: Size);

    /// Update the orientation of the preview connection
    fn set_video_orientation(&mut self, orientation: VideoOrientation);

    /// Render the preview
    fn view<'a, M: 'a>(&'a self) -> Element<'a, M>;
}
