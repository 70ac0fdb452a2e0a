// SPDX-License-Identifier: MPL-2.0

//! Capture view
//!
//! A self-contained camera capture surface: preview, tap gestures for
//! focus/exposure/reset with animated reticles, capture and mode buttons
//! and a recording timer. All camera work is delegated to a
//! [`CameraSession`]; all coordinate mapping to a [`PreviewSurface`].
//!
//! The view follows the usual update/view/subscription split. Hosts embed
//! it by mapping its [`Message`] into their own and forwarding it to
//! [`CaptureView::update`].
//!
//! ```text
//! ┌──────────────── stack ────────────────┐
//! │ controls      buttons, timer label    │  ← top, captures button input
//! │ GestureLayer  taps, reticles          │
//! │ preview       PreviewSurface::view    │
//! └───────────────────────────────────────┘
//! ```

mod controls;
pub mod delegate;
pub mod gestures;
pub mod overlay;
pub mod reticle;
pub mod style;
pub mod timer;

pub use delegate::CaptureViewDelegate;
pub use gestures::{GestureArbiter, GestureKind, TapOutcome};
pub use overlay::RawTap;
pub use reticle::ReticleController;
pub use style::{CaptureViewButtons, CaptureViewStyle, EdgeInsets, ShadowDepth};
pub use timer::{RecordTimer, TimerReading};

use crate::constants::{TIMER_TICK_INTERVAL, reticle::FRAME_INTERVAL};
use crate::session::{CameraSession, LetterboxPreview, PreviewSurface};
use cosmic::iced::{Length, Point, Subscription};
use cosmic::{Element, Task, widget};
use gestures::Tap;
use overlay::GestureLayer;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// What the capture button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaptureMode {
    /// Capture still images
    Photo,
    /// Toggle video recording
    #[default]
    Video,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Buttons
    CapturePressed,
    CameraModePressed,
    VideoModePressed,
    SwitchCamerasPressed,
    FlashPressed,

    // Gestures
    Tap(RawTap),
    /// Tap window of the given sequence elapsed
    TapWindowElapsed(u64),

    // Timing
    /// Recording timer tick for the given generation
    TimerTick(u64),
    AnimationFrame(Instant),
}

pub struct CaptureView<S, P = LetterboxPreview> {
    session: S,
    preview: P,
    mode: CaptureMode,
    gestures: GestureArbiter,
    reticles: ReticleController,
    timer: RecordTimer,
    delegate: Option<Box<dyn CaptureViewDelegate>>,
    style: CaptureViewStyle,
    buttons: CaptureViewButtons,
    /// Time reticles are sampled at when drawing
    clock: Instant,
}

impl<S: CameraSession, P: PreviewSurface> CaptureView<S, P> {
    /// Create the view and start the camera session
    ///
    /// All tap gestures start enabled. A session that fails to start is
    /// logged; the view stays usable and its commands become the session's
    /// problem.
    pub fn new(mut session: S, preview: P) -> Self {
        if let Err(err) = session.start_session() {
            error!(%err, "Failed to start camera session");
        }

        let mut view = Self {
            session,
            preview,
            mode: CaptureMode::default(),
            gestures: GestureArbiter::new(),
            reticles: ReticleController::default(),
            timer: RecordTimer::default(),
            delegate: None,
            style: CaptureViewStyle::default(),
            buttons: CaptureViewButtons::default(),
            clock: Instant::now(),
        };

        for kind in GestureKind::ALL {
            view.set_tap_enabled(kind, true);
        }

        view
    }

    pub fn with_mode(mut self, mode: CaptureMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_style(mut self, style: CaptureViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_buttons(mut self, buttons: CaptureViewButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_delegate(mut self, delegate: impl CaptureViewDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Replace (or clear) the delegate
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn CaptureViewDelegate>>) {
        self.delegate = delegate;
    }

    pub fn set_style(&mut self, style: CaptureViewStyle) {
        self.style = style;
    }

    pub fn set_buttons(&mut self, buttons: CaptureViewButtons) {
        self.buttons = buttons;
    }

    /// Enable or disable a tap gesture
    ///
    /// Enabling any gesture also enables tap-to-reset. Reticles exist
    /// exactly for the enabled gestures.
    pub fn set_tap_enabled(&mut self, kind: GestureKind, enabled: bool) {
        self.gestures.set_enabled(kind, enabled);

        let gestures = &self.gestures;
        self.reticles.sync(|kind| gestures.is_enabled(kind));

        info!(?kind, enabled, "Tap gesture toggled");
    }

    pub fn is_tap_enabled(&self, kind: GestureKind) -> bool {
        self.gestures.is_enabled(kind)
    }

    pub fn capture_mode(&self) -> CaptureMode {
        self.mode
    }

    /// Whether the session is recording
    pub fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut P {
        &mut self.preview
    }

    pub fn gestures(&self) -> &GestureArbiter {
        &self.gestures
    }

    pub fn reticles(&self) -> &ReticleController {
        &self.reticles
    }

    pub fn timer(&self) -> &RecordTimer {
        &self.timer
    }

    pub fn style(&self) -> &CaptureViewStyle {
        &self.style
    }

    pub fn buttons(&self) -> &CaptureViewButtons {
        &self.buttons
    }

    fn notify(&mut self, event: impl FnOnce(&mut dyn CaptureViewDelegate)) {
        if let Some(delegate) = self.delegate.as_deref_mut() {
            event(delegate);
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CapturePressed => self.handle_capture_pressed(),
            Message::CameraModePressed => self.handle_mode_pressed(CaptureMode::Photo),
            Message::VideoModePressed => self.handle_mode_pressed(CaptureMode::Video),
            Message::SwitchCamerasPressed => {
                self.session.switch_cameras();
                self.notify(|delegate| delegate.switch_cameras_pressed());
                Task::none()
            }
            Message::FlashPressed => {
                self.notify(|delegate| delegate.flash_pressed());
                Task::none()
            }
            Message::Tap(tap) => self.handle_tap(tap, Instant::now()),
            Message::TapWindowElapsed(sequence) => {
                self.handle_tap_window_elapsed(sequence, Instant::now())
            }
            Message::TimerTick(generation) => self.handle_timer_tick(generation),
            Message::AnimationFrame(now) => {
                self.clock = now;
                self.reticles.tick(now);
                Task::none()
            }
        }
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    fn handle_capture_pressed(&mut self) -> Task<Message> {
        let mode = self.mode;

        let task = match mode {
            CaptureMode::Photo => {
                self.session.capture_still_image();
                Task::none()
            }
            CaptureMode::Video if self.session.is_recording() => {
                // Timer stops before the session: the final reading needs
                // the recorded duration, which stop_recording clears
                self.stop_timer();
                self.session.stop_recording();
                Task::none()
            }
            CaptureMode::Video => {
                self.session.start_recording();
                self.start_timer()
            }
        };

        self.notify(|delegate| delegate.capture_pressed(mode));
        task
    }

    fn handle_mode_pressed(&mut self, mode: CaptureMode) -> Task<Message> {
        if self.mode != mode {
            info!(from = ?self.mode, to = ?mode, "Capture mode changed");
        }

        // Leaving video mode ends the recording
        if mode == CaptureMode::Photo && self.session.is_recording() {
            info!("Stopping recording before switching to photo mode");
            // Same order as the capture button: final reading first
            self.stop_timer();
            self.session.stop_recording();
        }

        self.mode = mode;

        match mode {
            CaptureMode::Photo => self.notify(|delegate| delegate.camera_mode_pressed()),
            CaptureMode::Video => self.notify(|delegate| delegate.video_mode_pressed()),
        }

        Task::none()
    }

    // =========================================================================
    // Recording timer
    // =========================================================================

    fn schedule_tick(generation: u64) -> Task<Message> {
        Task::perform(
            async move {
                tokio::time::sleep(TIMER_TICK_INTERVAL).await;
                generation
            },
            Message::TimerTick,
        )
    }

    fn start_timer(&mut self) -> Task<Message> {
        let generation = self.timer.start();
        debug!(generation, "Recording timer started");
        self.notify(|delegate| delegate.timer_started());
        Self::schedule_tick(generation)
    }

    fn stop_timer(&mut self) {
        let reading = TimerReading::from_duration(self.session.recorded_duration());
        self.timer.stop();
        debug!(%reading, "Recording timer stopped");
        self.notify(|delegate| delegate.timer_stopped(reading));
    }

    /// Handle a timer tick scheduled for `generation`
    pub fn handle_timer_tick(&mut self, generation: u64) -> Task<Message> {
        if !self.timer.accepts(generation) {
            debug!(generation, "Ignoring stale timer tick");
            return Task::none();
        }

        let reading = TimerReading::from_duration(self.session.recorded_duration());
        self.timer.record(reading);
        self.notify(|delegate| delegate.timer_updated(reading));

        Self::schedule_tick(generation)
    }

    // =========================================================================
    // Tap gestures
    // =========================================================================

    /// Feed a raw tap that happened at `now`
    pub fn handle_tap(&mut self, tap: RawTap, now: Instant) -> Task<Message> {
        self.preview.set_viewport(tap.viewport);
        self.preview
            .set_video_orientation(self.session.current_video_orientation());

        let outcome = self.gestures.on_tap(Tap {
            position: tap.position,
            touches: tap.touches,
            at: now,
        });
        self.apply_tap_outcome(outcome, now)
    }

    /// Re-evaluate a pending tap sequence once its window elapsed
    pub fn handle_tap_window_elapsed(&mut self, sequence: u64, now: Instant) -> Task<Message> {
        let outcome = self.gestures.resolve_expired(sequence, now);
        self.apply_tap_outcome(outcome, now)
    }

    fn apply_tap_outcome(&mut self, outcome: TapOutcome, now: Instant) -> Task<Message> {
        match outcome {
            TapOutcome::Recognized(kind, point) => {
                self.handle_gesture(kind, point, now);
                Task::none()
            }
            TapOutcome::Pending { sequence, wait } => Self::schedule_window_check(sequence, wait),
            TapOutcome::Ignored => Task::none(),
        }
    }

    fn schedule_window_check(sequence: u64, wait: Duration) -> Task<Message> {
        Task::perform(
            async move {
                tokio::time::sleep(wait).await;
                sequence
            },
            Message::TapWindowElapsed,
        )
    }

    fn handle_gesture(&mut self, kind: GestureKind, point: Point, now: Instant) {
        match kind {
            GestureKind::Focus => {
                if !self.session.supports_tap_to_focus() {
                    debug!("Active camera does not support tap to focus");
                    return;
                }
                let device_point = self.preview.capture_device_point_of_interest(point);
                self.reticles.show(kind, point, now);
                self.session.focus_at_point(device_point);
                self.notify(|delegate| delegate.tapped_to_focus(point));
            }
            GestureKind::Expose => {
                if !self.session.supports_tap_to_expose() {
                    debug!("Active camera does not support tap to expose");
                    return;
                }
                let device_point = self.preview.capture_device_point_of_interest(point);
                self.reticles.show(kind, point, now);
                self.session.expose_at_point(device_point);
                self.notify(|delegate| delegate.tapped_to_expose(point));
            }
            GestureKind::Reset => {
                // Reset always targets the preview center
                let center = self
                    .preview
                    .point_for_capture_device_point_of_interest(Point::new(0.5, 0.5));
                self.reticles.show(kind, center, now);
                self.session.reset_focus_and_exposure_modes();
                self.notify(|delegate| delegate.tapped_to_reset(center));
            }
        }

        self.clock = now;
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn subscription(&self) -> Subscription<Message> {
        if self.reticles.is_animating() {
            cosmic::iced::time::every(FRAME_INTERVAL).map(Message::AnimationFrame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let style = self.style;
        let gesture_layer = GestureLayer::new(self.reticles.visible_frames(self.clock));

        let content = cosmic::iced::widget::stack![
            self.preview.view(),
            gesture_layer,
            self.build_controls(),
        ];

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(move |_theme| style.container_style())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MULTI_TAP_WINDOW;
    use crate::errors::{SessionError, SessionResult};
    use crate::session::VideoOrientation;
    use cosmic::iced::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        TimerStarted,
        TimerUpdated(TimerReading),
        TimerStopped(TimerReading),
        Focus(Point),
        Expose(Point),
        Reset(Point),
        Flash,
        SwitchCameras,
        Capture(CaptureMode),
        CameraMode,
        VideoMode,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }
    }

    impl CaptureViewDelegate for Recorder {
        fn timer_started(&mut self) {
            self.0.borrow_mut().push(Event::TimerStarted);
        }
        fn timer_updated(&mut self, reading: TimerReading) {
            self.0.borrow_mut().push(Event::TimerUpdated(reading));
        }
        fn timer_stopped(&mut self, reading: TimerReading) {
            self.0.borrow_mut().push(Event::TimerStopped(reading));
        }
        fn tapped_to_focus(&mut self, point: Point) {
            self.0.borrow_mut().push(Event::Focus(point));
        }
        fn tapped_to_expose(&mut self, point: Point) {
            self.0.borrow_mut().push(Event::Expose(point));
        }
        fn tapped_to_reset(&mut self, point: Point) {
            self.0.borrow_mut().push(Event::Reset(point));
        }
        fn flash_pressed(&mut self) {
            self.0.borrow_mut().push(Event::Flash);
        }
        fn switch_cameras_pressed(&mut self) {
            self.0.borrow_mut().push(Event::SwitchCameras);
        }
        fn capture_pressed(&mut self, mode: CaptureMode) {
            self.0.borrow_mut().push(Event::Capture(mode));
        }
        fn camera_mode_pressed(&mut self) {
            self.0.borrow_mut().push(Event::CameraMode);
        }
        fn video_mode_pressed(&mut self) {
            self.0.borrow_mut().push(Event::VideoMode);
        }
    }

    #[derive(Debug, Default)]
    struct MockSession {
        start_error: Option<SessionError>,
        recording: bool,
        recorded: Duration,
        no_focus: bool,
        no_expose: bool,
        calls: Vec<String>,
    }

    impl CameraSession for MockSession {
        fn start_session(&mut self) -> SessionResult<()> {
            self.calls.push("start_session".into());
            match self.start_error.clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
        fn switch_cameras(&mut self) {
            self.calls.push("switch_cameras".into());
        }
        fn capture_still_image(&mut self) {
            self.calls.push("capture_still_image".into());
        }
        fn start_recording(&mut self) {
            self.recording = true;
            self.calls.push("start_recording".into());
        }
        fn stop_recording(&mut self) {
            self.recording = false;
            self.recorded = Duration::ZERO;
            self.calls.push("stop_recording".into());
        }
        fn is_recording(&self) -> bool {
            self.recording
        }
        fn recorded_duration(&self) -> Duration {
            self.recorded
        }
        fn current_video_orientation(&self) -> VideoOrientation {
            VideoOrientation::LandscapeRight
        }
        fn supports_tap_to_focus(&self) -> bool {
            !self.no_focus
        }
        fn supports_tap_to_expose(&self) -> bool {
            !self.no_expose
        }
        fn focus_at_point(&mut self, point: Point) {
            self.calls.push(format!("focus {:.2} {:.2}", point.x, point.y));
        }
        fn expose_at_point(&mut self, point: Point) {
            self.calls.push(format!("expose {:.2} {:.2}", point.x, point.y));
        }
        fn reset_focus_and_exposure_modes(&mut self) {
            self.calls.push("reset".into());
        }
    }

    const VIEWPORT: Size = Size::new(1920.0, 1080.0);

    fn view_with(session: MockSession) -> (CaptureView<MockSession>, Recorder) {
        let recorder = Recorder::default();
        let view = CaptureView::new(session, LetterboxPreview::new(1920, 1080))
            .with_delegate(recorder.clone());
        (view, recorder)
    }

    fn raw_tap(x: f32, y: f32, touches: u32) -> RawTap {
        RawTap {
            position: Point::new(x, y),
            touches,
            viewport: VIEWPORT,
        }
    }

    /// Single tap followed by the window check
    fn single_tap(view: &mut CaptureView<MockSession>, x: f32, y: f32, at: Instant) {
        let _ = view.handle_tap(raw_tap(x, y, 1), at);
        if let Some(sequence) = view.gestures().pending_sequence() {
            let _ = view.handle_tap_window_elapsed(sequence, at + MULTI_TAP_WINDOW);
        }
    }

    #[test]
    fn test_construction_starts_session_and_enables_taps() {
        let (view, _) = view_with(MockSession::default());

        assert_eq!(view.session().calls, vec!["start_session".to_string()]);
        for kind in GestureKind::ALL {
            assert!(view.is_tap_enabled(kind));
            assert!(view.reticles().get(kind).is_some());
        }
    }

    #[test]
    fn test_failed_session_start_is_not_fatal() {
        let (view, _) = view_with(MockSession {
            start_error: Some(SessionError::NoCameraFound),
            ..Default::default()
        });
        assert_eq!(view.capture_mode(), CaptureMode::Video);
    }

    #[test]
    fn test_starts_in_video_mode() {
        let (mut view, recorder) = view_with(MockSession::default());
        assert_eq!(view.capture_mode(), CaptureMode::Video);

        let _ = view.update(Message::CapturePressed);

        assert!(view.is_recording());
        assert!(view.timer().is_running());
        assert!(!view.session().calls.contains(&"capture_still_image".to_string()));
        assert_eq!(
            recorder.events(),
            vec![Event::TimerStarted, Event::Capture(CaptureMode::Video)]
        );
    }

    #[test]
    fn test_photo_capture() {
        let (view, recorder) = view_with(MockSession::default());
        let mut view = view.with_mode(CaptureMode::Photo);
        let _ = view.update(Message::CapturePressed);

        assert!(view.session().calls.contains(&"capture_still_image".to_string()));
        assert_eq!(recorder.events(), vec![Event::Capture(CaptureMode::Photo)]);
        assert!(!view.timer().is_running());
    }

    #[test]
    fn test_video_capture_toggles_recording_and_timer() {
        let (mut view, recorder) = view_with(MockSession::default());
        let _ = view.update(Message::VideoModePressed);

        let _ = view.update(Message::CapturePressed);
        assert!(view.is_recording());
        assert!(view.timer().is_running());

        view.session_mut().recorded = Duration::from_secs_f64(3725.9);
        let _ = view.update(Message::CapturePressed);
        assert!(!view.is_recording());
        assert!(!view.timer().is_running());

        let final_reading = TimerReading {
            hours: 1,
            minutes: 2,
            seconds: 5,
        };
        assert_eq!(
            recorder.events(),
            vec![
                Event::VideoMode,
                Event::TimerStarted,
                Event::Capture(CaptureMode::Video),
                Event::TimerStopped(final_reading),
                Event::Capture(CaptureMode::Video),
            ]
        );
    }

    #[test]
    fn test_timer_tick_reads_session_duration() {
        let (mut view, recorder) = view_with(MockSession::default());
        let _ = view.update(Message::VideoModePressed);
        let _ = view.update(Message::CapturePressed);

        view.session_mut().recorded = Duration::from_secs(61);
        let generation = view.timer().generation();
        let _ = view.update(Message::TimerTick(generation));

        let reading = TimerReading {
            hours: 0,
            minutes: 1,
            seconds: 1,
        };
        assert_eq!(view.timer().last_reading(), reading);
        assert_eq!(recorder.events().last(), Some(&Event::TimerUpdated(reading)));
    }

    #[test]
    fn test_stale_tick_after_stop_is_ignored() {
        let (mut view, recorder) = view_with(MockSession::default());
        let _ = view.update(Message::VideoModePressed);
        let _ = view.update(Message::CapturePressed);
        let generation = view.timer().generation();
        let _ = view.update(Message::CapturePressed);

        let before = recorder.events().len();
        let _ = view.update(Message::TimerTick(generation));
        assert_eq!(recorder.events().len(), before);
    }

    #[test]
    fn test_switching_to_photo_stops_recording() {
        let (mut view, recorder) = view_with(MockSession::default());
        let _ = view.update(Message::VideoModePressed);
        let _ = view.update(Message::CapturePressed);

        let _ = view.update(Message::CameraModePressed);

        assert_eq!(view.capture_mode(), CaptureMode::Photo);
        assert!(!view.is_recording());
        assert!(!view.timer().is_running());
        assert!(
            recorder
                .events()
                .contains(&Event::TimerStopped(TimerReading::default()))
        );
        assert_eq!(recorder.events().last(), Some(&Event::CameraMode));
    }

    #[test]
    fn test_button_notifications() {
        let (mut view, recorder) = view_with(MockSession::default());
        let _ = view.update(Message::FlashPressed);
        let _ = view.update(Message::SwitchCamerasPressed);

        assert_eq!(recorder.events(), vec![Event::Flash, Event::SwitchCameras]);
        assert!(view.session().calls.contains(&"switch_cameras".to_string()));
    }

    #[test]
    fn test_tap_to_focus_converts_point() {
        let (mut view, recorder) = view_with(MockSession::default());
        let t0 = Instant::now();
        single_tap(&mut view, 480.0, 270.0, t0);

        assert!(view.session().calls.contains(&"focus 0.25 0.25".to_string()));
        assert_eq!(recorder.events(), vec![Event::Focus(Point::new(480.0, 270.0))]);

        let frame = view
            .reticles()
            .get(GestureKind::Focus)
            .unwrap()
            .frame(t0 + MULTI_TAP_WINDOW);
        assert!(frame.visible);
        assert_eq!(frame.position, Point::new(480.0, 270.0));
    }

    #[test]
    fn test_double_tap_exposes_without_focus() {
        let (mut view, recorder) = view_with(MockSession::default());
        let t0 = Instant::now();

        let _ = view.handle_tap(raw_tap(960.0, 540.0, 1), t0);
        let _ = view.handle_tap(raw_tap(960.0, 540.0, 1), t0 + Duration::from_millis(100));

        assert_eq!(recorder.events(), vec![Event::Expose(Point::new(960.0, 540.0))]);
        assert!(view.session().calls.contains(&"expose 0.50 0.50".to_string()));
    }

    #[test]
    fn test_two_finger_double_tap_resets_at_center() {
        let (mut view, recorder) = view_with(MockSession::default());
        let t0 = Instant::now();

        let _ = view.handle_tap(raw_tap(100.0, 100.0, 2), t0);
        let _ = view.handle_tap(raw_tap(100.0, 100.0, 2), t0 + Duration::from_millis(100));

        assert_eq!(recorder.events(), vec![Event::Reset(Point::new(960.0, 540.0))]);
        assert!(view.session().calls.contains(&"reset".to_string()));
        assert!(view.reticles().is_animating());
    }

    #[test]
    fn test_unsupported_focus_does_nothing() {
        let (mut view, recorder) = view_with(MockSession {
            no_focus: true,
            ..Default::default()
        });
        single_tap(&mut view, 480.0, 270.0, Instant::now());

        assert!(recorder.events().is_empty());
        assert!(!view.reticles().is_animating());
    }

    #[test]
    fn test_disabled_focus_ignores_single_tap() {
        let (mut view, recorder) = view_with(MockSession::default());
        view.set_tap_enabled(GestureKind::Focus, false);

        assert!(view.reticles().get(GestureKind::Focus).is_none());
        single_tap(&mut view, 480.0, 270.0, Instant::now());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_enabling_focus_enables_reset() {
        let (mut view, _) = view_with(MockSession::default());
        view.set_tap_enabled(GestureKind::Reset, false);
        assert!(!view.is_tap_enabled(GestureKind::Reset));

        view.set_tap_enabled(GestureKind::Focus, true);
        assert!(view.is_tap_enabled(GestureKind::Reset));
        assert!(view.reticles().get(GestureKind::Reset).is_some());
    }

    #[test]
    fn test_animation_frame_retires_reticle() {
        let (mut view, _) = view_with(MockSession::default());
        let t0 = Instant::now();
        single_tap(&mut view, 480.0, 270.0, t0);
        assert!(view.reticles().is_animating());

        let _ = view.update(Message::AnimationFrame(t0 + Duration::from_secs(2)));
        assert!(!view.reticles().is_animating());
    }
}
