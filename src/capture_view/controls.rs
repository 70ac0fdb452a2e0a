// SPDX-License-Identifier: MPL-2.0

//! Capture view controls
//!
//! ```text
//! ┌───────────────────────────────────────┐
//! │ [flash]        ● 00:01:23    [switch] │
//! │                                       │
//! │ [PHOTO]          (  ●  )      [VIDEO] │
//! └───────────────────────────────────────┘
//! ```

use super::{CaptureMode, CaptureView, Message};
use crate::constants::ui;
use crate::fl;
use crate::session::{CameraSession, PreviewSurface};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl<S: CameraSession, P: PreviewSurface> CaptureView<S, P> {
    /// Build the control layer drawn above the preview
    pub(super) fn build_controls(&self) -> Element<'_, Message> {
        let top_row = widget::row()
            .push(Self::build_side_slot(self.build_flash_button(), Alignment::Start))
            .push(self.build_timer_label())
            .push(Self::build_side_slot(self.build_switch_button(), Alignment::End))
            .width(Length::Fill)
            .align_y(Alignment::Center);

        let bottom_row = widget::row()
            .push(Self::build_side_slot(
                self.build_mode_button(CaptureMode::Photo),
                Alignment::Start,
            ))
            .push_maybe(self.buttons.capture.then(|| self.build_capture_button()))
            .push(Self::build_side_slot(
                self.build_mode_button(CaptureMode::Video),
                Alignment::End,
            ))
            .width(Length::Fill)
            .align_y(Alignment::Center);

        widget::column()
            .push(top_row)
            .push(widget::vertical_space())
            .push(bottom_row)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(self.style.content_insets)
            .into()
    }

    /// Equal-width side section so the middle element stays centered
    fn build_side_slot<'a>(
        content: Option<Element<'a, Message>>,
        align: Alignment,
    ) -> Element<'a, Message> {
        let content =
            content.unwrap_or_else(|| widget::Space::new(Length::Shrink, Length::Shrink).into());

        widget::container(content)
            .width(Length::Fill)
            .align_x(align)
            .into()
    }

    /// Build the capture button
    ///
    /// - Photo mode: white circle
    /// - Video mode: red circle, darker and smaller while recording
    fn build_capture_button(&self) -> Element<'_, Message> {
        let recording = self.is_recording();

        let color = match self.mode {
            CaptureMode::Video if recording => Color::from_rgb(0.6, 0.05, 0.05),
            CaptureMode::Video => Color::from_rgb(0.9, 0.1, 0.1),
            CaptureMode::Photo => Color::WHITE,
        };

        let (inner_size, outer_size) = if recording {
            (
                ui::CAPTURE_BUTTON_INNER * 0.70,
                ui::CAPTURE_BUTTON_OUTER * 0.70,
            )
        } else {
            (ui::CAPTURE_BUTTON_INNER, ui::CAPTURE_BUTTON_OUTER)
        };

        let button_inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(color)),
            border: cosmic::iced::Border {
                radius: [ui::CAPTURE_BUTTON_RADIUS * (inner_size / ui::CAPTURE_BUTTON_INNER); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let button = widget::button::custom(button_inner)
            .on_press(Message::CapturePressed)
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        // Fixed-size wrapper so the shrinking button doesn't shift the row
        widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_x(ui::CAPTURE_BUTTON_OUTER)
            .center_y(ui::CAPTURE_BUTTON_OUTER)
            .into()
    }

    fn build_mode_button(&self, mode: CaptureMode) -> Option<Element<'_, Message>> {
        let (shown, label, message) = match mode {
            CaptureMode::Photo => (
                self.buttons.camera_mode,
                fl!("mode-photo"),
                Message::CameraModePressed,
            ),
            CaptureMode::Video => (
                self.buttons.video_mode,
                fl!("mode-video"),
                Message::VideoModePressed,
            ),
        };

        if !shown {
            return None;
        }

        Some(
            widget::button::text(label)
                .on_press(message)
                .class(if self.mode == mode {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Text
                })
                .into(),
        )
    }

    fn build_flash_button(&self) -> Option<Element<'_, Message>> {
        self.buttons.flash.then(|| {
            widget::tooltip(
                widget::button::icon(widget::icon::from_name("camera-flash-symbolic"))
                    .on_press(Message::FlashPressed),
                widget::text(fl!("flash")),
                widget::tooltip::Position::Bottom,
            )
            .into()
        })
    }

    fn build_switch_button(&self) -> Option<Element<'_, Message>> {
        self.buttons.switch_cameras.then(|| {
            widget::tooltip(
                widget::button::icon(widget::icon::from_name("camera-switch-symbolic"))
                    .on_press(Message::SwitchCamerasPressed),
                widget::text(fl!("switch-cameras")),
                widget::tooltip::Position::Bottom,
            )
            .into()
        })
    }

    /// Red dot and `HH:MM:SS` while the recording timer runs
    fn build_timer_label(&self) -> Element<'_, Message> {
        if !self.timer.is_running() {
            return widget::Space::new(Length::Shrink, Length::Shrink).into();
        }

        let spacing = cosmic::theme::spacing();
        let dot_radius = ui::RECORDING_DOT_SIZE / 2.0;

        let red_dot = widget::container(widget::Space::new(
            Length::Fixed(ui::RECORDING_DOT_SIZE),
            Length::Fixed(ui::RECORDING_DOT_SIZE),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0))),
            border: cosmic::iced::Border {
                radius: [dot_radius; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        });

        widget::container(
            widget::row()
                .push(red_dot)
                .push(
                    widget::text(self.timer.last_reading().to_string())
                        .size(ui::TIMER_TEXT_SIZE),
                )
                .align_y(Alignment::Center)
                .spacing(spacing.space_xxs),
        )
        .padding([spacing.space_xxxs, spacing.space_xs])
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                ui::OVERLAY_BACKGROUND_ALPHA,
            ))),
            text_color: Some(Color::WHITE),
            border: cosmic::iced::Border {
                radius: [ui::RECORDING_DOT_SIZE; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
    }
}
