// SPDX-License-Identifier: MPL-2.0

//! Gesture layer widget
//!
//! Sits between the preview and the controls. It turns pointer and touch
//! input into raw taps for the gesture arbiter and draws the visible
//! reticles on top of the preview.
//!
//! Input mapping:
//! - Touch: a tap ends when the last finger lifts; its touch count is the
//!   largest number of fingers that were down at the same time
//! - Left click: one-touch tap
//! - Right click: two-touch tap (touchpads report a two-finger tap as a
//!   secondary click)

use super::Message;
use super::reticle::ReticleFrame;
use crate::constants::reticle::{BORDER_WIDTH, SIZE};
use cosmic::iced::advanced::widget::{Tree, tree};
use cosmic::iced::advanced::{Clipboard, Layout, Shell, Widget, layout, mouse, renderer};
use cosmic::iced::event::Status;
use cosmic::iced::touch;
use cosmic::iced::{Border, Color, Element, Event, Length, Point, Rectangle, Size, Vector};
use cosmic::{Renderer, Theme};
use std::collections::HashMap;

/// Tap reported by the gesture layer, in view coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTap {
    pub position: Point,
    pub touches: u32,
    /// Size of the layer when the tap happened
    pub viewport: Size,
}

/// Fingers currently down on the layer
#[derive(Debug, Default)]
struct State {
    fingers: HashMap<touch::Finger, Point>,
    peak_touches: u32,
    first_position: Option<Point>,
}

impl State {
    fn reset(&mut self) {
        self.fingers.clear();
        self.peak_touches = 0;
        self.first_position = None;
    }
}

/// Full-size layer that reports taps and draws reticles
pub struct GestureLayer {
    reticles: Vec<(Color, ReticleFrame)>,
}

impl GestureLayer {
    pub fn new(reticles: Vec<(Color, ReticleFrame)>) -> Self {
        Self { reticles }
    }
}

/// Square bounds of a reticle centered on `frame.position`
pub fn reticle_bounds(origin: Point, frame: &ReticleFrame) -> Rectangle {
    let size = SIZE * frame.scale;
    Rectangle {
        x: origin.x + frame.position.x - size / 2.0,
        y: origin.y + frame.position.y - size / 2.0,
        width: size,
        height: size,
    }
}

impl Widget<Message, Theme, Renderer> for GestureLayer {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        use cosmic::iced::advanced::Renderer as _;

        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            for (color, frame) in &self.reticles {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: reticle_bounds(bounds.position(), frame),
                        border: Border {
                            color: *color,
                            width: BORDER_WIDTH,
                            radius: 0.0.into(),
                        },
                        shadow: Default::default(),
                    },
                    Color::TRANSPARENT,
                );
            }
        });
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();
        let local = |position: Point| position - Vector::new(bounds.x, bounds.y);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                let touches = match button {
                    mouse::Button::Left => 1,
                    mouse::Button::Right => 2,
                    _ => return Status::Ignored,
                };
                let Some(position) = cursor.position_in(bounds) else {
                    return Status::Ignored;
                };

                shell.publish(Message::Tap(RawTap {
                    position,
                    touches,
                    viewport: bounds.size(),
                }));
                Status::Captured
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(position) {
                    return Status::Ignored;
                }

                state.fingers.insert(id, position);
                state.peak_touches = state.peak_touches.max(state.fingers.len() as u32);
                state.first_position.get_or_insert(local(position));
                Status::Captured
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                if state.fingers.remove(&id).is_none() {
                    return Status::Ignored;
                }

                if state.fingers.is_empty() {
                    if let Some(position) = state.first_position {
                        shell.publish(Message::Tap(RawTap {
                            position,
                            touches: state.peak_touches,
                            viewport: bounds.size(),
                        }));
                    }
                    state.reset();
                }
                Status::Captured
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                // A cancelled touch never completes a tap
                if state.fingers.remove(&id).is_some() {
                    state.reset();
                    return Status::Captured;
                }
                Status::Ignored
            }
            _ => Status::Ignored,
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a> From<GestureLayer> for Element<'a, Message, Theme, Renderer> {
    fn from(widget: GestureLayer) -> Self {
        Element::new(widget)
    }
}
