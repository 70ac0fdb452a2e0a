// SPDX-License-Identifier: GPL-3.0-only

//! Message handling for the application

use super::state::{AppModel, Message};
use crate::capture_view;
use crate::config::Config;
use crate::fl;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            Message::Capture(message) => self.handle_capture_message(message),
            Message::UpdateConfig(config) => self.handle_update_config(config),
        }
    }

    fn handle_capture_message(
        &mut self,
        message: capture_view::Message,
    ) -> Task<cosmic::Action<Message>> {
        let switched_cameras = matches!(message, capture_view::Message::SwitchCamerasPressed);
        let mode_before = self.capture.capture_mode();

        let task = self
            .capture
            .update(message)
            .map(|message| cosmic::Action::App(Message::Capture(message)));

        if switched_cameras {
            self.update_preview_label();
        }

        let mode = self.capture.capture_mode();
        if mode != mode_before {
            self.persist_capture_mode();
        }

        task
    }

    /// Apply a config change made on disk
    ///
    /// Theme, tap toggles and mirroring apply immediately. The simulated
    /// camera count is only read when the session is built, so a change
    /// takes effect on the next start.
    fn handle_update_config(&mut self, stored: Config) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        let previous = self.config.effective().clone();
        self.config.replace_stored(stored);
        let config = self.config.effective();

        if config.simulated_cameras != previous.simulated_cameras {
            info!(
                cameras = config.simulated_cameras,
                "Simulated camera count changes on restart"
            );
        }

        let mirror = config.mirror_preview;
        let theme_changed = config.app_theme != previous.app_theme;

        self.capture.preview_mut().set_mirrored(mirror);
        self.apply_tap_settings();

        if theme_changed {
            cosmic::command::set_theme(self.config.effective().app_theme.theme())
        } else {
            Task::none()
        }
    }

    /// Push the configured tap toggles into the capture view
    pub(crate) fn apply_tap_settings(&mut self) {
        for (kind, enabled) in self.config.effective().tap_settings() {
            self.capture.set_tap_enabled(kind, enabled);
        }
    }

    pub(crate) fn update_preview_label(&mut self) {
        let index = self.capture.session().current_camera() + 1;
        self.capture
            .preview_mut()
            .set_label(fl!("simulated-camera", index = index));
    }

    fn persist_capture_mode(&mut self) {
        let stored = self.config.set_capture_mode(self.capture.capture_mode());

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = stored.write_entry(handler)
        {
            error!(?err, "Failed to save capture mode");
        }
    }
}
