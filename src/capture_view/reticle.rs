// SPDX-License-Identifier: MPL-2.0

//! Tap reticles
//!
//! Each enabled gesture owns a square reticle that is shown where the
//! gesture was recognized. Showing a reticle plays a fixed sequence:
//!
//! ```text
//! t = 0                 visible, scale 1.0, centered on the tap
//! t = 0 .. 250 ms       scale eases down to 0.5
//! t = 250 .. 650 ms     held at 0.5
//! t = 650 ms            hidden
//! ```
//!
//! Animation state is sampled from timestamps rather than advanced per
//! frame, so a missed frame never leaves a reticle stuck on screen.

use super::gestures::GestureKind;
use crate::constants::reticle::{BORDER_WIDTH, HIDE_DELAY, MIN_SCALE, SCALE_DURATION, SIZE};
use cosmic::iced::{Color, Point};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Never shown since creation
    Idle,
    Animating { since: Instant },
    /// Sequence completed; keeps the final transform until shown again
    Finished,
}

/// Sampled visual state of a reticle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticleFrame {
    pub visible: bool,
    /// Center in view coordinates
    pub position: Point,
    pub scale: f32,
}

/// Visual indicator for one gesture kind
#[derive(Debug, Clone, PartialEq)]
pub struct Reticle {
    kind: GestureKind,
    position: Point,
    phase: Phase,
}

impl Reticle {
    fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            position: Point::ORIGIN,
            phase: Phase::Idle,
        }
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn border_color(&self) -> Color {
        border_color(self.kind)
    }

    pub fn border_width(&self) -> f32 {
        BORDER_WIDTH
    }

    /// Edge length before scaling
    pub fn size(&self) -> f32 {
        SIZE
    }

    fn show(&mut self, at: Point, now: Instant) {
        self.position = at;
        self.phase = Phase::Animating { since: now };
    }

    /// Sample the reticle at `now`
    pub fn frame(&self, now: Instant) -> ReticleFrame {
        let (visible, scale) = match self.phase {
            Phase::Idle => (false, 1.0),
            Phase::Finished => (false, MIN_SCALE),
            Phase::Animating { since } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed >= SCALE_DURATION + HIDE_DELAY {
                    (false, MIN_SCALE)
                } else if elapsed >= SCALE_DURATION {
                    (true, MIN_SCALE)
                } else {
                    let t = elapsed.as_secs_f32() / SCALE_DURATION.as_secs_f32();
                    (true, 1.0 - (1.0 - MIN_SCALE) * ease_in_out(t))
                }
            }
        };

        ReticleFrame {
            visible,
            position: self.position,
            scale,
        }
    }

    fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    fn tick(&mut self, now: Instant) {
        if let Phase::Animating { since } = self.phase
            && now.saturating_duration_since(since) >= SCALE_DURATION + HIDE_DELAY
        {
            self.phase = Phase::Finished;
        }
    }
}

/// Border color of the reticle for a gesture kind
pub fn border_color(kind: GestureKind) -> Color {
    match kind {
        GestureKind::Focus => Color::WHITE,
        // Material yellow darken-1
        GestureKind::Expose => Color::from_rgb8(0xFD, 0xD8, 0x35),
        // Material red accent-1
        GestureKind::Reset => Color::from_rgb8(0xFF, 0x8A, 0x80),
    }
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Owns the reticle of every enabled gesture
#[derive(Debug, Clone, Default)]
pub struct ReticleController {
    reticles: Vec<Reticle>,
}

impl ReticleController {
    pub fn get(&self, kind: GestureKind) -> Option<&Reticle> {
        self.reticles.iter().find(|reticle| reticle.kind == kind)
    }

    /// Create the reticle for `kind` unless it already exists
    pub fn prepare(&mut self, kind: GestureKind) {
        if self.get(kind).is_none() {
            debug!(?kind, "Reticle created");
            self.reticles.push(Reticle::new(kind));
        }
    }

    /// Destroy the reticle for `kind`
    pub fn remove(&mut self, kind: GestureKind) {
        self.reticles.retain(|reticle| reticle.kind != kind);
    }

    /// Create or destroy reticles so exactly the enabled kinds have one
    pub fn sync(&mut self, is_enabled: impl Fn(GestureKind) -> bool) {
        for kind in GestureKind::ALL {
            if is_enabled(kind) {
                self.prepare(kind);
            } else {
                self.remove(kind);
            }
        }
    }

    /// Restart the show sequence of the reticle for `kind` at `at`
    ///
    /// Returns false when the kind has no reticle.
    pub fn show(&mut self, kind: GestureKind, at: Point, now: Instant) -> bool {
        match self.reticles.iter_mut().find(|reticle| reticle.kind == kind) {
            Some(reticle) => {
                reticle.show(at, now);
                true
            }
            None => false,
        }
    }

    /// Retire reticles whose sequence completed
    pub fn tick(&mut self, now: Instant) {
        for reticle in &mut self.reticles {
            reticle.tick(now);
        }
    }

    /// Whether any reticle needs animation frames
    pub fn is_animating(&self) -> bool {
        self.reticles.iter().any(Reticle::is_animating)
    }

    /// Visible reticles sampled at `now`, with their border color
    pub fn visible_frames(&self, now: Instant) -> Vec<(Color, ReticleFrame)> {
        self.reticles
            .iter()
            .map(|reticle| (reticle.border_color(), reticle.frame(now)))
            .filter(|(_, frame)| frame.visible)
            .collect()
    }
}
