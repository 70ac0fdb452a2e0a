// SPDX-License-Identifier: MPL-2.0

//! Simulated camera session
//!
//! Stands in for a hardware session so the capture view can run on machines
//! without cameras. It keeps the bookkeeping a real session would expose
//! (active device, recording clock, last points of interest) and logs every
//! command it receives.

use super::{CameraSession, VideoOrientation};
use crate::errors::{SessionError, SessionResult};
use cosmic::iced::Point;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct SimulatedSession {
    camera_count: usize,
    current_camera: usize,
    running: bool,
    recording_started: Option<Instant>,
    orientation: VideoOrientation,
    supports_focus: bool,
    supports_expose: bool,
    focus_point: Option<Point>,
    exposure_point: Option<Point>,
    stills_captured: u32,
}

impl SimulatedSession {
    pub fn new(camera_count: usize) -> Self {
        Self {
            camera_count,
            current_camera: 0,
            running: false,
            recording_started: None,
            orientation: VideoOrientation::default(),
            supports_focus: true,
            supports_expose: true,
            focus_point: None,
            exposure_point: None,
            stills_captured: 0,
        }
    }

    /// Override the reported tap-to-focus / tap-to-expose capabilities
    pub fn with_capabilities(mut self, focus: bool, expose: bool) -> Self {
        self.supports_focus = focus;
        self.supports_expose = expose;
        self
    }

    pub fn set_video_orientation(&mut self, orientation: VideoOrientation) {
        self.orientation = orientation;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Index of the active camera device
    pub fn current_camera(&self) -> usize {
        self.current_camera
    }

    /// Last point of interest passed to `focus_at_point`
    pub fn focus_point(&self) -> Option<Point> {
        self.focus_point
    }

    /// Last point of interest passed to `expose_at_point`
    pub fn exposure_point(&self) -> Option<Point> {
        self.exposure_point
    }

    pub fn stills_captured(&self) -> u32 {
        self.stills_captured
    }
}

impl Default for SimulatedSession {
    fn default() -> Self {
        Self::new(crate::constants::simulated::DEFAULT_CAMERA_COUNT)
    }
}

impl CameraSession for SimulatedSession {
    fn start_session(&mut self) -> SessionResult<()> {
        if self.camera_count == 0 {
            return Err(SessionError::NoCameraFound);
        }
        self.running = true;
        info!(cameras = self.camera_count, "Simulated session started");
        Ok(())
    }

    fn switch_cameras(&mut self) {
        if self.camera_count > 1 {
            self.current_camera = (self.current_camera + 1) % self.camera_count;
            // A new device starts in continuous auto modes
            self.focus_point = None;
            self.exposure_point = None;
            info!(camera = self.current_camera, "Switched camera");
        } else {
            info!("Only one camera available, cannot switch");
        }
    }

    fn capture_still_image(&mut self) {
        if !self.running {
            warn!("Still capture requested while session is not running");
            return;
        }
        self.stills_captured += 1;
        info!(count = self.stills_captured, "Captured still image");
    }

    fn start_recording(&mut self) {
        if !self.running {
            warn!("Recording requested while session is not running");
            return;
        }
        if self.recording_started.is_some() {
            warn!("Recording already in progress");
            return;
        }
        self.recording_started = Some(Instant::now());
        info!("Recording started");
    }

    fn stop_recording(&mut self) {
        if let Some(started) = self.recording_started.take() {
            info!(
                duration_secs = started.elapsed().as_secs_f64(),
                "Recording stopped"
            );
        }
    }

    fn is_recording(&self) -> bool {
        self.recording_started.is_some()
    }

    fn recorded_duration(&self) -> Duration {
        self.recording_started
            .map(|started| started.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    fn current_video_orientation(&self) -> VideoOrientation {
        self.orientation
    }

    fn supports_tap_to_focus(&self) -> bool {
        self.supports_focus
    }

    fn supports_tap_to_expose(&self) -> bool {
        self.supports_expose
    }

    fn focus_at_point(&mut self, point: Point) {
        debug!(x = point.x, y = point.y, "Focus point of interest");
        self.focus_point = Some(point);
    }

    fn expose_at_point(&mut self, point: Point) {
        debug!(x = point.x, y = point.y, "Exposure point of interest");
        self.exposure_point = Some(point);
    }

    fn reset_focus_and_exposure_modes(&mut self) {
        debug!("Focus and exposure reset to continuous auto");
        self.focus_point = None;
        self.exposure_point = None;
    }
}
