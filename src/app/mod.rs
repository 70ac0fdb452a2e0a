// SPDX-License-Identifier: MPL-2.0

//! Desktop host for the capture view
//!
//! Runs a [`CaptureView`] over a simulated camera session so the view can
//! be exercised without camera hardware.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, AppFlags)
//! - `update`: Message handling and config persistence

mod state;
mod update;

use crate::capture_view::CaptureView;
use crate::config::{Config, LayeredConfig};
use crate::constants::simulated::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::session::{LetterboxPreview, SimulatedSession};
use cosmic::iced::Subscription;
use cosmic::{Element, Task};
pub use state::{AppFlags, AppModel, LogDelegate, Message};
use tracing::info;

impl AppModel {
    /// Build the capture view described by `config`
    pub fn build_capture_view(config: &Config) -> CaptureView<SimulatedSession, LetterboxPreview> {
        let session = SimulatedSession::new(config.simulated_cameras);
        let preview =
            LetterboxPreview::new(FRAME_WIDTH, FRAME_HEIGHT).mirrored(config.mirror_preview);

        CaptureView::new(session, preview)
            .with_mode(config.capture_mode)
            .with_delegate(LogDelegate)
    }
}

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = AppFlags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic_utils.viewfinder";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let (config_handler, stored) = Config::load(Self::APP_ID);
        let config = LayeredConfig::new(stored, flags.overrides);
        let effective = config.effective();

        info!(
            mode = ?effective.capture_mode,
            cameras = effective.simulated_cameras,
            "Starting capture view"
        );

        let mut app = AppModel {
            core,
            capture: Self::build_capture_view(effective),
            config,
            config_handler,
        };

        app.apply_tap_settings();
        app.update_preview_label();

        let theme_task = cosmic::command::set_theme(app.config.effective().app_theme.theme());
        (app, theme_task)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.capture.view().map(Message::Capture)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        Subscription::batch([config_sub, self.capture.subscription().map(Message::Capture)])
    }
}
