// SPDX-License-Identifier: MPL-2.0

//! Tap gesture arbitration
//!
//! Three tap gestures share the capture view surface:
//!
//! | Gesture | Taps | Touches |
//! |---------|------|---------|
//! | Focus   | 1    | 1       |
//! | Expose  | 2    | 1       |
//! | Reset   | 2    | 2       |
//!
//! Raw taps are grouped into sequences: a tap with the same touch count
//! arriving within [`MULTI_TAP_WINDOW`] of the previous one extends the
//! sequence. After every tap each installed detector is either matched,
//! still possible or failed. A matched detector only recognizes once every
//! detector it waits for has failed, so a single tap is held back until a
//! double tap can no longer follow. At most one gesture is recognized per
//! sequence.
//!
//! Failure dependencies only exist between installed detectors. Installing
//! or removing a detector rebuilds its edges in both directions.

use crate::constants::MULTI_TAP_WINDOW;
use cosmic::iced::Point;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Kind of tap gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GestureKind {
    Focus,
    Expose,
    Reset,
}

impl GestureKind {
    pub const ALL: [GestureKind; 3] = [
        GestureKind::Focus,
        GestureKind::Expose,
        GestureKind::Reset,
    ];

    pub fn taps_required(self) -> u32 {
        match self {
            GestureKind::Focus => 1,
            GestureKind::Expose | GestureKind::Reset => 2,
        }
    }

    pub fn touches_required(self) -> u32 {
        match self {
            GestureKind::Focus | GestureKind::Expose => 1,
            GestureKind::Reset => 2,
        }
    }

    /// Whether `self` must wait for `other` to fail before recognizing
    fn depends_on(self, other: GestureKind) -> bool {
        matches!(
            (self, other),
            (GestureKind::Reset, GestureKind::Focus)
                | (GestureKind::Reset, GestureKind::Expose)
                | (GestureKind::Focus, GestureKind::Expose)
                | (GestureKind::Expose, GestureKind::Focus)
        )
    }

    fn index(self) -> usize {
        match self {
            GestureKind::Focus => 0,
            GestureKind::Expose => 1,
            GestureKind::Reset => 2,
        }
    }
}

/// Detector configuration for one gesture kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureConfig {
    pub kind: GestureKind,
    pub taps_required: u32,
    pub touches_required: u32,
    /// A detector is installed exactly while its gesture is enabled
    pub enabled: bool,
    waits_for: BTreeSet<GestureKind>,
}

impl GestureConfig {
    fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            taps_required: kind.taps_required(),
            touches_required: kind.touches_required(),
            enabled: false,
            waits_for: BTreeSet::new(),
        }
    }

    /// Detectors that must fail before this one may recognize
    pub fn waits_for(&self) -> &BTreeSet<GestureKind> {
        &self.waits_for
    }
}

/// A completed tap as reported by the gesture layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    /// Location in view coordinates
    pub position: Point,
    /// Number of simultaneous touches
    pub touches: u32,
    pub at: Instant,
}

/// Result of feeding a tap (or an expired window) to the arbiter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// A gesture was recognized at the given view point
    Recognized(GestureKind, Point),
    /// The sequence is still open; check again after `wait`
    Pending { sequence: u64, wait: Duration },
    /// No gesture matched the sequence
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetectorState {
    Matched,
    Possible,
    Failed,
}

#[derive(Debug, Clone)]
struct TapSequence {
    id: u64,
    touches: u32,
    taps: u32,
    position: Point,
    last_tap_at: Instant,
}

impl TapSequence {
    fn window_open(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tap_at) < MULTI_TAP_WINDOW
    }

    fn remaining_window(&self, now: Instant) -> Duration {
        MULTI_TAP_WINDOW.saturating_sub(now.saturating_duration_since(self.last_tap_at))
    }
}

/// Installs tap detectors and decides which one recognizes a tap sequence
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    configs: [GestureConfig; 3],
    sequence: Option<TapSequence>,
    next_sequence_id: u64,
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self {
            configs: GestureKind::ALL.map(GestureConfig::new),
            sequence: None,
            next_sequence_id: 0,
        }
    }
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self, kind: GestureKind) -> &GestureConfig {
        &self.configs[kind.index()]
    }

    pub fn is_enabled(&self, kind: GestureKind) -> bool {
        self.config(kind).enabled
    }

    /// Detectors `kind` currently waits for
    pub fn waits_for(&self, kind: GestureKind) -> &BTreeSet<GestureKind> {
        self.config(kind).waits_for()
    }

    /// Id of the tap sequence still waiting for resolution
    pub fn pending_sequence(&self) -> Option<u64> {
        self.sequence.as_ref().map(|sequence| sequence.id)
    }

    /// Enable or disable a gesture
    ///
    /// Enabling any gesture also (re)installs the reset gesture. Enabling
    /// is idempotent: the detector is removed and reinstalled, so it never
    /// ends up duplicated.
    pub fn set_enabled(&mut self, kind: GestureKind, enabled: bool) {
        if enabled {
            self.install(GestureKind::Reset);
            if kind != GestureKind::Reset {
                self.install(kind);
            }
        } else {
            self.remove(kind);
        }
    }

    fn install(&mut self, kind: GestureKind) {
        self.remove(kind);
        self.configs[kind.index()].enabled = true;

        for other in GestureKind::ALL {
            if other == kind || !self.is_enabled(other) {
                continue;
            }
            if kind.depends_on(other) {
                self.configs[kind.index()].waits_for.insert(other);
            }
            if other.depends_on(kind) {
                self.configs[other.index()].waits_for.insert(kind);
            }
        }

        debug!(?kind, waits_for = ?self.waits_for(kind), "Installed tap detector");
    }

    fn remove(&mut self, kind: GestureKind) {
        let config = &mut self.configs[kind.index()];
        config.enabled = false;
        config.waits_for.clear();

        for config in &mut self.configs {
            config.waits_for.remove(&kind);
        }
    }

    /// Feed a completed tap
    pub fn on_tap(&mut self, tap: Tap) -> TapOutcome {
        let extends = self.sequence.as_ref().is_some_and(|sequence| {
            sequence.touches == tap.touches && sequence.window_open(tap.at)
        });

        if extends && let Some(sequence) = self.sequence.as_mut() {
            sequence.taps += 1;
            sequence.position = tap.position;
            sequence.last_tap_at = tap.at;
        } else {
            if let Some(abandoned) = self.sequence.take() {
                debug!(sequence = abandoned.id, "Tap sequence abandoned");
            }
            self.next_sequence_id = self.next_sequence_id.wrapping_add(1);
            self.sequence = Some(TapSequence {
                id: self.next_sequence_id,
                touches: tap.touches,
                taps: 1,
                position: tap.position,
                last_tap_at: tap.at,
            });
        }

        self.resolve(tap.at)
    }

    /// Re-evaluate an open sequence once its tap window has elapsed
    ///
    /// Outcomes for sequences that already resolved, or were replaced by a
    /// newer sequence, are `Ignored`.
    pub fn resolve_expired(&mut self, sequence: u64, now: Instant) -> TapOutcome {
        match &self.sequence {
            Some(current) if current.id == sequence => self.resolve(now),
            _ => TapOutcome::Ignored,
        }
    }

    fn detector_state(
        &self,
        kind: GestureKind,
        sequence: &TapSequence,
        now: Instant,
    ) -> DetectorState {
        let config = self.config(kind);
        if !config.enabled || sequence.touches != config.touches_required {
            return DetectorState::Failed;
        }

        if sequence.taps == config.taps_required {
            DetectorState::Matched
        } else if sequence.taps < config.taps_required && sequence.window_open(now) {
            DetectorState::Possible
        } else {
            DetectorState::Failed
        }
    }

    fn resolve(&mut self, now: Instant) -> TapOutcome {
        let Some(sequence) = self.sequence.as_ref() else {
            return TapOutcome::Ignored;
        };

        let states = GestureKind::ALL.map(|kind| self.detector_state(kind, sequence, now));

        let recognized = GestureKind::ALL.into_iter().find(|&kind| {
            states[kind.index()] == DetectorState::Matched
                && self
                    .waits_for(kind)
                    .iter()
                    .all(|dependency| states[dependency.index()] == DetectorState::Failed)
        });

        if let Some(kind) = recognized {
            let position = sequence.position;
            debug!(
                ?kind,
                sequence = sequence.id,
                taps = sequence.taps,
                "Tap gesture recognized"
            );
            self.sequence = None;
            return TapOutcome::Recognized(kind, position);
        }

        let open = states.iter().any(|state| *state != DetectorState::Failed);
        if open && sequence.window_open(now) {
            TapOutcome::Pending {
                sequence: sequence.id,
                wait: sequence.remaining_window(now),
            }
        } else {
            // A matched detector still blocked once the window closed cannot
            // make progress either
            self.sequence = None;
            TapOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(at: Instant, touches: u32) -> Tap {
        Tap {
            position: Point::new(100.0, 50.0),
            touches,
            at,
        }
    }

    fn all_enabled() -> GestureArbiter {
        let mut arbiter = GestureArbiter::new();
        for kind in GestureKind::ALL {
            arbiter.set_enabled(kind, true);
        }
        arbiter
    }

    fn set(kinds: &[GestureKind]) -> BTreeSet<GestureKind> {
        kinds.iter().copied().collect()
    }

    #[test]
    fn test_enabling_focus_forces_reset() {
        let mut arbiter = GestureArbiter::new();
        arbiter.set_enabled(GestureKind::Focus, true);

        assert!(arbiter.is_enabled(GestureKind::Focus));
        assert!(arbiter.is_enabled(GestureKind::Reset));
        assert!(!arbiter.is_enabled(GestureKind::Expose));
    }

    #[test]
    fn test_dependency_graph_with_all_enabled() {
        let arbiter = all_enabled();

        assert_eq!(
            arbiter.waits_for(GestureKind::Reset),
            &set(&[GestureKind::Focus, GestureKind::Expose])
        );
        assert_eq!(arbiter.waits_for(GestureKind::Focus), &set(&[GestureKind::Expose]));
        assert_eq!(arbiter.waits_for(GestureKind::Expose), &set(&[GestureKind::Focus]));
    }

    #[test]
    fn test_dependencies_only_reference_installed_detectors() {
        let mut arbiter = all_enabled();
        arbiter.set_enabled(GestureKind::Expose, false);

        assert_eq!(arbiter.waits_for(GestureKind::Reset), &set(&[GestureKind::Focus]));
        assert!(arbiter.waits_for(GestureKind::Focus).is_empty());
        assert!(arbiter.waits_for(GestureKind::Expose).is_empty());
    }

    #[test]
    fn test_enabling_twice_is_idempotent() {
        let mut arbiter = all_enabled();
        let before = arbiter.configs.clone();

        arbiter.set_enabled(GestureKind::Focus, true);
        arbiter.set_enabled(GestureKind::Focus, true);

        assert_eq!(arbiter.configs, before);
    }

    #[test]
    fn test_single_tap_waits_for_double_tap_window() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        let outcome = arbiter.on_tap(tap(t0, 1));
        let TapOutcome::Pending { sequence, wait } = outcome else {
            panic!("expected pending outcome, got {:?}", outcome);
        };
        assert_eq!(wait, MULTI_TAP_WINDOW);

        assert_eq!(
            arbiter.resolve_expired(sequence, t0 + MULTI_TAP_WINDOW),
            TapOutcome::Recognized(GestureKind::Focus, Point::new(100.0, 50.0))
        );
    }

    #[test]
    fn test_single_tap_without_expose_recognizes_immediately() {
        let mut arbiter = GestureArbiter::new();
        arbiter.set_enabled(GestureKind::Focus, true);

        assert!(matches!(
            arbiter.on_tap(tap(Instant::now(), 1)),
            TapOutcome::Recognized(GestureKind::Focus, _)
        ));
    }

    #[test]
    fn test_double_tap_recognizes_expose_only() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        let first = arbiter.on_tap(tap(t0, 1));
        let TapOutcome::Pending { sequence, .. } = first else {
            panic!("expected pending outcome, got {:?}", first);
        };

        assert!(matches!(
            arbiter.on_tap(tap(t0 + Duration::from_millis(120), 1)),
            TapOutcome::Recognized(GestureKind::Expose, _)
        ));

        // The focus window expiring afterwards must not fire focus
        assert_eq!(
            arbiter.resolve_expired(sequence, t0 + MULTI_TAP_WINDOW),
            TapOutcome::Ignored
        );
    }

    #[test]
    fn test_slow_taps_are_two_focus_sequences() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        let first = arbiter.on_tap(tap(t0, 1));
        let second = arbiter.on_tap(tap(t0 + Duration::from_millis(500), 1));

        let (TapOutcome::Pending { sequence: a, .. }, TapOutcome::Pending { sequence: b, .. }) =
            (first, second)
        else {
            panic!("expected two pending sequences");
        };
        assert_ne!(a, b);
        assert_eq!(arbiter.resolve_expired(a, t0 + Duration::from_millis(900)), TapOutcome::Ignored);
        assert!(matches!(
            arbiter.resolve_expired(b, t0 + Duration::from_millis(900)),
            TapOutcome::Recognized(GestureKind::Focus, _)
        ));
    }

    #[test]
    fn test_two_finger_double_tap_recognizes_reset() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        assert!(matches!(arbiter.on_tap(tap(t0, 2)), TapOutcome::Pending { .. }));
        assert!(matches!(
            arbiter.on_tap(tap(t0 + Duration::from_millis(150), 2)),
            TapOutcome::Recognized(GestureKind::Reset, _)
        ));
    }

    #[test]
    fn test_two_finger_single_tap_is_ignored() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        let TapOutcome::Pending { sequence, .. } = arbiter.on_tap(tap(t0, 2)) else {
            panic!("expected pending outcome");
        };
        assert_eq!(
            arbiter.resolve_expired(sequence, t0 + MULTI_TAP_WINDOW),
            TapOutcome::Ignored
        );
    }

    #[test]
    fn test_disabled_gesture_never_recognizes() {
        let mut arbiter = all_enabled();
        arbiter.set_enabled(GestureKind::Expose, false);
        let t0 = Instant::now();

        // Focus no longer waits, so the first tap fires focus right away and
        // the second tap starts a new sequence
        assert!(matches!(
            arbiter.on_tap(tap(t0, 1)),
            TapOutcome::Recognized(GestureKind::Focus, _)
        ));
        assert!(matches!(
            arbiter.on_tap(tap(t0 + Duration::from_millis(100), 1)),
            TapOutcome::Recognized(GestureKind::Focus, _)
        ));
    }

    #[test]
    fn test_disabling_during_pending_sequence_drops_it() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        let TapOutcome::Pending { sequence, .. } = arbiter.on_tap(tap(t0, 1)) else {
            panic!("expected pending outcome");
        };
        arbiter.set_enabled(GestureKind::Focus, false);

        assert_eq!(
            arbiter.resolve_expired(sequence, t0 + MULTI_TAP_WINDOW),
            TapOutcome::Ignored
        );
    }

    #[test]
    fn test_early_expiry_check_stays_pending() {
        let mut arbiter = all_enabled();
        let t0 = Instant::now();

        let TapOutcome::Pending { sequence, .. } = arbiter.on_tap(tap(t0, 1)) else {
            panic!("expected pending outcome");
        };

        let outcome = arbiter.resolve_expired(sequence, t0 + Duration::from_millis(100));
        assert_eq!(
            outcome,
            TapOutcome::Pending {
                sequence,
                wait: MULTI_TAP_WINDOW - Duration::from_millis(100)
            }
        );
    }
}
