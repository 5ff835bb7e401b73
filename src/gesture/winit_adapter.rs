//! Turns the raw winit pointer stream into gesture samples
//!
//! winit only reports absolute cursor positions and button state, so this
//! tracker owns the bookkeeping between press and release: distinguishing a
//! click from a drag, accumulating vertical travel, and estimating velocity.
//! Callers pass the event timestamp explicitly, which keeps the math
//! deterministic under test.

use std::time::{Duration, Instant};

use crate::gesture::{GestureSample, HeaderRelease};

/// Pointer travel below this is a click, not a drag.
pub const DRAG_THRESHOLD_PIXELS: f64 = 4.0;

/// Weight of the previous smoothed velocity when folding in a new reading.
/// Raw per-event velocities are noisy; this keeps flick detection stable.
const VELOCITY_SMOOTHING: f64 = 0.6;

/// Readings closer together than this carry no usable velocity signal.
const MIN_SAMPLE_INTERVAL: Duration = Duration::from_micros(500);

#[derive(Debug)]
struct PressState {
    origin: (f64, f64),
    last_y: f64,
    last_time: Instant,
    /// Smoothed, px per millisecond, positive down.
    velocity_y: f64,
    dragging: bool,
}

/// Tracks one pointer from press to release and emits gesture samples.
#[derive(Debug, Default)]
pub struct PointerTracker {
    press: Option<PressState>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the current press has crossed the drag threshold.
    pub fn is_dragging(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.dragging)
    }

    /// Record a button press. Any earlier unfinished press is discarded.
    pub fn press(&mut self, pos: (f64, f64), now: Instant) {
        self.press = Some(PressState {
            origin: pos,
            last_y: pos.1,
            last_time: now,
            velocity_y: 0.0,
            dragging: false,
        });
    }

    /// Record cursor movement while pressed.
    ///
    /// Returns nothing until the drag threshold is crossed. The crossing
    /// event yields the start sample; later movement yields move samples
    /// carrying cumulative travel from the press origin.
    pub fn moved(&mut self, pos: (f64, f64), now: Instant) -> Option<GestureSample> {
        let press = self.press.as_mut()?;
        press.fold_velocity(pos.1, now);

        if !press.dragging {
            let dx = pos.0 - press.origin.0;
            let dy = pos.1 - press.origin.1;
            if (dx * dx + dy * dy).sqrt() < DRAG_THRESHOLD_PIXELS {
                return None;
            }
            press.dragging = true;
            return Some(GestureSample::start());
        }

        Some(GestureSample::moving(
            pos.1 - press.origin.1,
            press.velocity_y,
        ))
    }

    /// Record the button release that ends a panel drag.
    ///
    /// Returns the end sample, or nothing if the press never became a drag
    /// (a plain click).
    pub fn release(&mut self, pos: (f64, f64), now: Instant) -> Option<GestureSample> {
        let mut press = self.press.take()?;
        if !press.dragging {
            return None;
        }
        press.fold_velocity(pos.1, now);
        Some(GestureSample::end(
            pos.1 - press.origin.1,
            press.velocity_y,
        ))
    }

    /// Record the button release that ends a header drag.
    ///
    /// The header decision runs in px and px/s, so the tracked px/ms
    /// velocity is scaled up. Plain clicks still report, with zero
    /// translation and velocity, and decide to nothing downstream.
    pub fn release_header(&mut self, pos: (f64, f64), now: Instant) -> Option<HeaderRelease> {
        let mut press = self.press.take()?;
        press.fold_velocity(pos.1, now);
        Some(HeaderRelease::new(
            pos.1 - press.origin.1,
            press.velocity_y * 1000.0,
        ))
    }
}

impl PressState {
    fn fold_velocity(&mut self, y: f64, now: Instant) {
        let dt = now.saturating_duration_since(self.last_time);
        if dt < MIN_SAMPLE_INTERVAL {
            return;
        }
        let instant = (y - self.last_y) / (dt.as_secs_f64() * 1000.0);
        self.velocity_y =
            VELOCITY_SMOOTHING * self.velocity_y + (1.0 - VELOCITY_SMOOTHING) * instant;
        self.last_y = y;
        self.last_time = now;
    }
}
