// SPDX-License-Identifier: MPL-2.0

//! Letterboxed preview surface
//!
//! Maps between view coordinates and normalized device points of interest
//! for a frame of known size drawn into the capture view. The frame is
//! either letterboxed (`Contain`) or scaled to fill and cropped (`Cover`),
//! optionally mirrored for front-facing cameras.

use super::{PreviewSurface, VideoOrientation};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Background, Color, Length, Point, Size};
use cosmic::widget;

/// How the frame is fitted into the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoContentFit {
    /// Scale to fit within bounds (letterbox)
    #[default]
    Contain,
    /// Scale to fill bounds, cropping the overflow
    Cover,
}

/// Area the frame content occupies inside the view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Calculate where the frame content is drawn within a container
///
/// With `Cover` the rectangle extends past the container and the offsets
/// are negative.
pub fn calculate_video_bounds(
    container: Size,
    frame_width: u32,
    frame_height: u32,
    content_fit: VideoContentFit,
) -> ContentRect {
    let frame_aspect = frame_width as f32 / frame_height as f32;
    let container_aspect = container.width / container.height;

    // Contain fits the limiting edge, Cover the other one
    let fit_width = match content_fit {
        VideoContentFit::Contain => frame_aspect > container_aspect,
        VideoContentFit::Cover => frame_aspect <= container_aspect,
    };

    let (width, height) = if fit_width {
        (container.width, container.width / frame_aspect)
    } else {
        (container.height * frame_aspect, container.height)
    };

    ContentRect {
        x: (container.width - width) / 2.0,
        y: (container.height - height) / 2.0,
        width,
        height,
    }
}

/// Preview surface for a frame of fixed size
#[derive(Debug, Clone)]
pub struct LetterboxPreview {
    viewport: Size,
    frame_width: u32,
    frame_height: u32,
    content_fit: VideoContentFit,
    mirrored: bool,
    orientation: VideoOrientation,
    label: Option<String>,
}

impl LetterboxPreview {
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            viewport: Size::ZERO,
            frame_width,
            frame_height,
            content_fit: VideoContentFit::default(),
            mirrored: false,
            orientation: VideoOrientation::default(),
            label: None,
        }
    }

    pub fn content_fit(mut self, content_fit: VideoContentFit) -> Self {
        self.content_fit = content_fit;
        self
    }

    /// Mirror the preview horizontally (selfie mode)
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Caption shown while no frames are rendered
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    fn is_degenerate(&self) -> bool {
        self.viewport.width <= 0.0
            || self.viewport.height <= 0.0
            || self.frame_width == 0
            || self.frame_height == 0
    }

    fn content_rect(&self) -> ContentRect {
        calculate_video_bounds(
            self.viewport,
            self.frame_width,
            self.frame_height,
            self.content_fit,
        )
    }
}

impl PreviewSurface for LetterboxPreview {
    fn capture_device_point_of_interest(&self, view_point: Point) -> Point {
        if self.is_degenerate() {
            return Point::new(0.5, 0.5);
        }

        let rect = self.content_rect();
        let mut u = ((view_point.x - rect.x) / rect.width).clamp(0.0, 1.0);
        let v = ((view_point.y - rect.y) / rect.height).clamp(0.0, 1.0);

        if self.mirrored {
            u = 1.0 - u;
        }

        self.orientation.view_to_device(Point::new(u, v))
    }

    fn point_for_capture_device_point_of_interest(&self, device_point: Point) -> Point {
        if self.is_degenerate() {
            return Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        }

        let normalized = self.orientation.device_to_view(device_point);
        let u = if self.mirrored {
            1.0 - normalized.x
        } else {
            normalized.x
        };

        let rect = self.content_rect();
        Point::new(rect.x + u * rect.width, rect.y + normalized.y * rect.height)
    }

    fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    fn set_video_orientation(&mut self, orientation: VideoOrientation) {
        self.orientation = orientation;
    }

    fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| fl!("preview-no-signal"));

        widget::container(widget::text(label).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(cosmic::iced::alignment::Horizontal::Center)
            .align_y(cosmic::iced::alignment::Vertical::Center)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::from_rgb(0.08, 0.08, 0.08))),
                text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.6)),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(width: f32, height: f32) -> LetterboxPreview {
        let mut preview = LetterboxPreview::new(1920, 1080);
        preview.set_viewport(Size::new(width, height));
        preview
    }

    #[test]
    fn test_contain_letterboxes_vertically() {
        // 16:9 frame in a square view: bars above and below
        let rect = calculate_video_bounds(
            Size::new(1000.0, 1000.0),
            1920,
            1080,
            VideoContentFit::Contain,
        );
        assert_eq!(rect.width, 1000.0);
        assert!((rect.height - 562.5).abs() < 0.01);
        assert!((rect.y - 218.75).abs() < 0.01);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn test_cover_overflows_horizontally() {
        let rect =
            calculate_video_bounds(Size::new(1000.0, 1000.0), 1920, 1080, VideoContentFit::Cover);
        assert_eq!(rect.height, 1000.0);
        assert!(rect.width > 1000.0);
        assert!(rect.x < 0.0);
    }

    #[test]
    fn test_view_center_maps_to_device_center() {
        let preview = preview(800.0, 600.0);
        let device = preview.capture_device_point_of_interest(Point::new(400.0, 300.0));
        assert!((device.x - 0.5).abs() < 1e-6);
        assert!((device.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_letterbox_bar_clamps_to_edge() {
        let preview = preview(1000.0, 1000.0);
        // Tap in the top letterbox bar
        let device = preview.capture_device_point_of_interest(Point::new(250.0, 10.0));
        assert_eq!(device.y, 0.0);
        assert!((device.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_mirrored_flips_horizontal_axis() {
        let preview = preview(1920.0, 1080.0).mirrored(true);
        let device = preview.capture_device_point_of_interest(Point::new(480.0, 540.0));
        assert!((device.x - 0.75).abs() < 1e-6);
        assert!((device.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_mirroring_can_be_toggled_at_runtime() {
        let mut preview = preview(1920.0, 1080.0);
        preview.set_mirrored(true);
        assert!(preview.is_mirrored());

        let device = preview.capture_device_point_of_interest(Point::new(480.0, 540.0));
        assert!((device.x - 0.75).abs() < 1e-6);

        preview.set_mirrored(false);
        let device = preview.capture_device_point_of_interest(Point::new(480.0, 540.0));
        assert!((device.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_device_point_maps_back_to_view() {
        let mut preview = preview(1000.0, 1000.0).mirrored(true);
        preview.set_video_orientation(VideoOrientation::Portrait);

        let view_point = Point::new(300.0, 400.0);
        let device = preview.capture_device_point_of_interest(view_point);
        let back = preview.point_for_capture_device_point_of_interest(device);
        assert!((back.x - view_point.x).abs() < 1e-3);
        assert!((back.y - view_point.y).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_viewport_targets_center() {
        let preview = LetterboxPreview::new(1920, 1080);
        assert_eq!(
            preview.capture_device_point_of_interest(Point::new(10.0, 10.0)),
            Point::new(0.5, 0.5)
        );
    }
}
