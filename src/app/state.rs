// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::capture_view::{self, CaptureMode, CaptureView, CaptureViewDelegate, TimerReading};
use crate::config::{Config, ConfigOverrides, LayeredConfig};
use crate::session::{LetterboxPreview, SimulatedSession};
use cosmic::cosmic_config;
use cosmic::iced::Point;
use tracing::{debug, info};

/// Data passed from the command line to the application
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    pub overrides: ConfigOverrides,
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Persisted configuration and the command line overrides on top of it
    pub config: LayeredConfig,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// The embedded capture view
    pub capture: CaptureView<SimulatedSession, LetterboxPreview>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message for the embedded capture view
    Capture(capture_view::Message),
    /// Configuration changed on disk
    UpdateConfig(Config),
}

/// Delegate that reports capture view events to the log
#[derive(Debug, Default)]
pub struct LogDelegate;

impl CaptureViewDelegate for LogDelegate {
    fn timer_started(&mut self) {
        info!("Recording timer started");
    }

    fn timer_updated(&mut self, reading: TimerReading) {
        debug!(%reading, "Recording timer");
    }

    fn timer_stopped(&mut self, reading: TimerReading) {
        info!(%reading, "Recording timer stopped");
    }

    fn tapped_to_focus(&mut self, point: Point) {
        info!(x = point.x, y = point.y, "Tapped to focus");
    }

    fn tapped_to_expose(&mut self, point: Point) {
        info!(x = point.x, y = point.y, "Tapped to expose");
    }

    fn tapped_to_reset(&mut self, point: Point) {
        info!(x = point.x, y = point.y, "Tapped to reset");
    }

    fn flash_pressed(&mut self) {
        info!("Flash button pressed");
    }

    fn switch_cameras_pressed(&mut self) {
        info!("Switch cameras button pressed");
    }

    fn capture_pressed(&mut self, mode: CaptureMode) {
        info!(?mode, "Capture button pressed");
    }

    fn camera_mode_pressed(&mut self) {
        info!("Camera mode button pressed");
    }

    fn video_mode_pressed(&mut self) {
        info!("Video mode button pressed");
    }
}
