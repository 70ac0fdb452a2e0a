// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Interval between recording timer ticks
pub const TIMER_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Window in which a follow-up tap extends the current tap sequence
///
/// Also the time a single tap waits before it is accepted as a focus tap,
/// because a double tap (expose) may still follow.
pub const MULTI_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Reticle timing and geometry
pub mod reticle {
    use std::time::Duration;

    /// Duration of the scale-down animation
    pub const SCALE_DURATION: Duration = Duration::from_millis(250);

    /// Time the scaled-down reticle stays visible before it is hidden
    pub const HIDE_DELAY: Duration = Duration::from_millis(400);

    /// Final scale of the scale-down animation
    pub const MIN_SCALE: f32 = 0.5;

    /// Edge length of the (square) reticle in logical pixels
    pub const SIZE: f32 = 150.0;

    /// Reticle border width
    pub const BORDER_WIDTH: f32 = 2.0;

    /// Redraw interval while a reticle is animating (~60 fps)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}

/// UI sizing constants
pub mod ui {
    /// Capture button size (outer)
    pub const CAPTURE_BUTTON_OUTER: f32 = 60.0;

    /// Capture button size (inner)
    pub const CAPTURE_BUTTON_INNER: f32 = 50.0;

    /// Capture button border radius
    pub const CAPTURE_BUTTON_RADIUS: f32 = 25.0;

    /// Overlay button/container background transparency (0.0 = transparent, 1.0 = opaque)
    pub const OVERLAY_BACKGROUND_ALPHA: f32 = 0.6;

    /// Recording indicator dot diameter
    pub const RECORDING_DOT_SIZE: f32 = 12.0;

    /// Recording timer text size
    pub const TIMER_TEXT_SIZE: u16 = 14;
}

/// Simulated camera defaults
pub mod simulated {
    /// Frame width reported by the simulated camera
    pub const FRAME_WIDTH: u32 = 1920;

    /// Frame height reported by the simulated camera
    pub const FRAME_HEIGHT: u32 = 1080;

    /// Number of simulated camera devices
    pub const DEFAULT_CAMERA_COUNT: usize = 2;
}
