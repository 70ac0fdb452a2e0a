// SPDX-License-Identifier: MPL-2.0

//! Capture view appearance and button layout

use cosmic::iced::{Background, Border, Color, Padding, Shadow, Vector};
use cosmic::widget;

/// Insets between the view edge and its controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }
}

impl From<EdgeInsets> for Padding {
    fn from(insets: EdgeInsets) -> Self {
        Padding {
            top: insets.top,
            right: insets.right,
            bottom: insets.bottom,
            left: insets.left,
        }
    }
}

/// Elevation of the view's drop shadow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowDepth {
    #[default]
    None,
    Depth1,
    Depth2,
    Depth3,
    Depth4,
    Depth5,
}

impl ShadowDepth {
    fn level(self) -> f32 {
        match self {
            ShadowDepth::None => 0.0,
            ShadowDepth::Depth1 => 1.0,
            ShadowDepth::Depth2 => 2.0,
            ShadowDepth::Depth3 => 3.0,
            ShadowDepth::Depth4 => 4.0,
            ShadowDepth::Depth5 => 5.0,
        }
    }

    pub fn shadow(self) -> Shadow {
        if self == ShadowDepth::None {
            return Shadow::default();
        }

        let level = self.level();
        Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, level),
            blur_radius: level * 2.0,
        }
    }
}

/// Visual style applied to the capture view container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureViewStyle {
    pub background: Color,
    pub border_width: f32,
    pub border_color: Color,
    pub corner_radius: f32,
    pub content_insets: EdgeInsets,
    pub shadow_depth: ShadowDepth,
}

impl Default for CaptureViewStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            corner_radius: 0.0,
            content_insets: EdgeInsets::uniform(16.0),
            shadow_depth: ShadowDepth::None,
        }
    }
}

impl CaptureViewStyle {
    /// Container style for the outer view
    pub fn container_style(&self) -> widget::container::Style {
        widget::container::Style {
            background: Some(Background::Color(self.background)),
            border: Border {
                color: self.border_color,
                width: self.border_width,
                radius: self.corner_radius.into(),
            },
            shadow: self.shadow_depth.shadow(),
            ..Default::default()
        }
    }
}

/// Which controls the capture view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureViewButtons {
    pub capture: bool,
    pub camera_mode: bool,
    pub video_mode: bool,
    pub switch_cameras: bool,
    pub flash: bool,
}

impl Default for CaptureViewButtons {
    fn default() -> Self {
        Self {
            capture: true,
            camera_mode: true,
            video_mode: true,
            switch_cameras: true,
            flash: true,
        }
    }
}

impl CaptureViewButtons {
    /// Only the capture button
    pub fn capture_only() -> Self {
        Self {
            capture: true,
            camera_mode: false,
            video_mode: false,
            switch_cameras: false,
            flash: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_shadow_by_default() {
        let style = CaptureViewStyle::default();
        assert_eq!(style.container_style().shadow, Shadow::default());
    }

    #[test]
    fn test_deeper_shadow_blurs_more() {
        let shallow = ShadowDepth::Depth1.shadow();
        let deep = ShadowDepth::Depth5.shadow();
        assert!(deep.blur_radius > shallow.blur_radius);
        assert!(deep.offset.y > shallow.offset.y);
    }

    #[test]
    fn test_insets_become_padding() {
        let padding: Padding = EdgeInsets {
            top: 1.0,
            left: 2.0,
            bottom: 3.0,
            right: 4.0,
        }
        .into();
        assert_eq!(padding.top, 1.0);
        assert_eq!(padding.left, 2.0);
        assert_eq!(padding.bottom, 3.0);
        assert_eq!(padding.right, 4.0);
    }
}
