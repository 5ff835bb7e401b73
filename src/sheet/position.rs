//! Sheet position state machine
//!
//! Owns the vertical offset of the sheet and the authoritative expanded
//! flag. The offset lives in `[0, peek_height]`: 0 is fully expanded,
//! `peek_height` is the collapsed rest position. During a drag the offset
//! tracks the finger 1:1; on release a distance-or-velocity rule picks the
//! terminal state and a spring carries the sheet there.
//!
//! The expanded flag flips at release resolution, the instant the terminal
//! animation starts, not when it finishes settling.

use std::time::Duration;

use crate::animation::{SpringAnimation, SpringParams};
use crate::config::{DragThresholds, SheetConfig};

/// Lifecycle phase of the sheet position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPhase {
    Collapsed,
    Expanded,
    /// A finger owns the offset. `from_expanded` is the state the drag left.
    Dragging { from_expanded: bool },
    /// A release decision is animating toward its terminal offset.
    Settling { to_expanded: bool },
}

/// Decide the terminal state for a released panel drag.
///
/// Either enough distance or enough velocity commits the transition (OR,
/// never AND); anything less snaps back to the state the drag started from.
/// Negative values point up, toward expansion. Returns the resolved
/// expanded flag.
pub fn resolve_release(
    from_expanded: bool,
    delta_y: f64,
    velocity_y: f64,
    thresholds: &DragThresholds,
) -> bool {
    if from_expanded {
        let collapses =
            delta_y > thresholds.distance_px || velocity_y > thresholds.velocity_px_ms;
        !collapses
    } else {
        delta_y < -thresholds.distance_px || velocity_y < -thresholds.velocity_px_ms
    }
}

/// Vertical position of the sheet, from drag input through settle.
#[derive(Debug, Clone)]
pub struct SheetPosition {
    peek_height: f64,
    offset: f64,
    /// Offset at the instant the current drag grabbed the sheet. For drags
    /// leaving a stable state this equals that state's rest offset; a drag
    /// that grabs a settling sheet takes over from wherever it is.
    drag_base: f64,
    phase: SheetPhase,
    spring: Option<SpringAnimation>,
    open_spring: SpringParams,
    close_spring: SpringParams,
    thresholds: DragThresholds,
}

impl SheetPosition {
    /// New sheet, collapsed at its peek offset.
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            peek_height: config.peek_height,
            offset: config.peek_height,
            drag_base: config.peek_height,
            phase: SheetPhase::Collapsed,
            spring: None,
            open_spring: config.open_spring,
            close_spring: config.close_spring,
            thresholds: config.drag,
        }
    }

    /// Current offset in `[0, peek_height]`. 0 = expanded.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn peek_height(&self) -> f64 {
        self.peek_height
    }

    /// The authoritative expanded flag.
    ///
    /// Mid-drag this is still the departed state; mid-settle it is already
    /// the resolved target.
    pub fn is_expanded(&self) -> bool {
        match self.phase {
            SheetPhase::Collapsed => false,
            SheetPhase::Expanded => true,
            SheetPhase::Dragging { from_expanded } => from_expanded,
            SheetPhase::Settling { to_expanded } => to_expanded,
        }
    }

    /// Begin a drag session. Returns true if a new session actually began
    /// (false for a duplicate start), which is the cue for a one-shot
    /// haptic pulse.
    ///
    /// Grabbing a settling sheet cancels the spring and freezes the offset
    /// under the finger.
    pub fn drag_start(&mut self) -> bool {
        if matches!(self.phase, SheetPhase::Dragging { .. }) {
            return false;
        }
        let from_expanded = self.is_expanded();
        self.spring = None;
        self.drag_base = self.offset;
        self.phase = SheetPhase::Dragging { from_expanded };
        true
    }

    /// Track the finger: offset = drag base + cumulative delta, clamped.
    ///
    /// Only meaningful while dragging; a non-finite delta leaves the offset
    /// untouched.
    pub fn drag_move(&mut self, delta_y: f64) {
        if !matches!(self.phase, SheetPhase::Dragging { .. }) {
            return;
        }
        if !delta_y.is_finite() {
            return;
        }
        self.offset = (self.drag_base + delta_y).clamp(0.0, self.peek_height);
    }

    /// End the drag: run the release decision and start the settle spring.
    ///
    /// Returns the resolved expanded flag. Called outside a drag session it
    /// decides nothing and reports the current flag.
    pub fn drag_end(&mut self, delta_y: f64, velocity_y: f64) -> bool {
        let SheetPhase::Dragging { from_expanded } = self.phase else {
            return self.is_expanded();
        };
        let delta_y = if delta_y.is_finite() { delta_y } else { 0.0 };
        let velocity_y = if velocity_y.is_finite() { velocity_y } else { 0.0 };

        let to_expanded = resolve_release(from_expanded, delta_y, velocity_y, &self.thresholds);
        tracing::debug!(
            from_expanded,
            delta_y,
            velocity_y,
            to_expanded,
            "sheet drag released"
        );
        self.settle_to(to_expanded);
        to_expanded
    }

    /// Programmatic expand. Returns false when already expanded or already
    /// settling toward expanded.
    pub fn expand(&mut self) -> bool {
        match self.phase {
            SheetPhase::Expanded | SheetPhase::Settling { to_expanded: true } => false,
            _ => {
                self.settle_to(true);
                true
            }
        }
    }

    /// Programmatic collapse. Returns false when already collapsed or
    /// already settling toward collapsed.
    pub fn collapse(&mut self) -> bool {
        match self.phase {
            SheetPhase::Collapsed | SheetPhase::Settling { to_expanded: false } => false,
            _ => {
                self.settle_to(false);
                true
            }
        }
    }

    /// Advance a settle animation. Returns true while the offset is moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let SheetPhase::Settling { to_expanded } = self.phase else {
            return false;
        };
        let Some(spring) = self.spring.as_mut() else {
            return false;
        };

        let changed = spring.tick(dt);
        self.offset = spring.value().clamp(0.0, self.peek_height);

        if spring.is_done() {
            self.offset = self.base_offset(to_expanded);
            self.phase = if to_expanded {
                SheetPhase::Expanded
            } else {
                SheetPhase::Collapsed
            };
            self.spring = None;
        }
        changed
    }

    /// Start (or redirect) the settle spring toward a terminal state.
    ///
    /// A live spring is retargeted in place so an interrupted transition
    /// keeps its current value and momentum.
    fn settle_to(&mut self, to_expanded: bool) {
        let target = self.base_offset(to_expanded);
        let params = if to_expanded {
            self.open_spring
        } else {
            self.close_spring
        };
        match self.spring.as_mut() {
            Some(spring) => spring.retarget(target, params),
            None => self.spring = Some(SpringAnimation::new(self.offset, target, params)),
        }
        self.phase = SheetPhase::Settling { to_expanded };
    }

    fn base_offset(&self, expanded: bool) -> f64 {
        if expanded {
            0.0
        } else {
            self.peek_height
        }
    }
}
