// SPDX-License-Identifier: MPL-2.0

//! Viewfinder - a camera capture view for the COSMIC desktop environment
//!
//! This library provides [`CaptureView`], a camera capture surface with tap
//! gestures for focus, exposure and reset, animated reticles, capture and
//! mode buttons and a recording timer, plus a small desktop host that runs
//! it over a simulated camera.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`capture_view`]: The capture view component (gestures, reticles, timer)
//! - [`session`]: Camera session and preview surface abstraction
//! - [`app`]: Desktop host application
//! - [`config`]: User configuration handling
//!
//! # Example
//!
//! ```ignore
//! use viewfinder::capture_view::{CaptureView, Message};
//! use viewfinder::session::{LetterboxPreview, SimulatedSession};
//!
//! let mut view = CaptureView::new(SimulatedSession::default(), LetterboxPreview::new(1920, 1080));
//! let _task = view.update(Message::CapturePressed);
//! ```

pub mod app;
pub mod capture_view;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod session;

// Re-export commonly used types
pub use app::{AppFlags, AppModel, Message};
pub use capture_view::{CaptureMode, CaptureView, CaptureViewDelegate, GestureKind};
pub use config::Config;
pub use session::{CameraSession, PreviewSurface};
