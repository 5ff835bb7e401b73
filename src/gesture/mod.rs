//! Gesture input for the sheet
//!
//! - `GestureSample` / `GesturePhase`: one normalized sample of a vertical
//!   drag (cumulative distance since the drag began, plus instantaneous
//!   velocity in px/ms)
//! - `HeaderRelease`: end-of-gesture reading from the header strip, in the
//!   header's own units (px translation, px/s velocity)
//! - `GestureSampler`: per-drag accumulator that sanitizes bad samples
//! - `winit_adapter::PointerTracker`: turns raw pointer events into samples

pub mod winit_adapter;

pub use winit_adapter::PointerTracker;

/// Where a sample falls in the drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

/// One vertical drag sample.
///
/// `delta_y` is cumulative from the start of the drag, `velocity_y` is
/// instantaneous. Both use screen convention: positive points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Pixels travelled since the drag began.
    pub delta_y: f64,
    /// Pixels per millisecond.
    pub velocity_y: f64,
    pub phase: GesturePhase,
}

impl GestureSample {
    pub fn start() -> Self {
        Self {
            delta_y: 0.0,
            velocity_y: 0.0,
            phase: GesturePhase::Start,
        }
    }

    pub fn moving(delta_y: f64, velocity_y: f64) -> Self {
        Self {
            delta_y,
            velocity_y,
            phase: GesturePhase::Move,
        }
    }

    pub fn end(delta_y: f64, velocity_y: f64) -> Self {
        Self {
            delta_y,
            velocity_y,
            phase: GesturePhase::End,
        }
    }
}

/// End-of-gesture reading from the header strip.
///
/// The header works in its own units (total translation in px, velocity in
/// px/s) and only gets consulted when the pointer is released, so it carries
/// no phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderRelease {
    pub translation_y: f64,
    pub velocity_y: f64,
}

impl HeaderRelease {
    pub fn new(translation_y: f64, velocity_y: f64) -> Self {
        Self {
            translation_y,
            velocity_y,
        }
    }
}

/// Accumulates samples for one drag session.
///
/// Input devices occasionally produce NaN or infinite readings. The sampler
/// treats a non-finite distance as "no movement this sample" (the cumulative
/// value holds) and a non-finite velocity as zero, so one bad sample never
/// teleports the sheet or forces a fling.
#[derive(Debug, Clone, Default)]
pub struct GestureSampler {
    active: bool,
    delta_y: f64,
    velocity_y: f64,
}

impl GestureSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a new drag session, discarding any previous accumulation.
    pub fn begin(&mut self) {
        self.active = true;
        self.delta_y = 0.0;
        self.velocity_y = 0.0;
    }

    /// Fold in a move sample. Returns the sanitized cumulative distance.
    pub fn advance(&mut self, sample: &GestureSample) -> f64 {
        if !self.active {
            return 0.0;
        }
        self.absorb(sample);
        self.delta_y
    }

    /// Fold in the final sample and close the session.
    ///
    /// Returns the sanitized `(delta_y, velocity_y)` pair the release
    /// decision runs on.
    pub fn finish(&mut self, sample: &GestureSample) -> (f64, f64) {
        if !self.active {
            return (0.0, 0.0);
        }
        self.absorb(sample);
        self.active = false;
        (self.delta_y, self.velocity_y)
    }

    fn absorb(&mut self, sample: &GestureSample) {
        if sample.delta_y.is_finite() {
            self.delta_y = sample.delta_y;
        }
        self.velocity_y = if sample.velocity_y.is_finite() {
            sample.velocity_y
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_tracks_cumulative_delta() {
        let mut sampler = GestureSampler::new();
        sampler.begin();

        assert_eq!(sampler.advance(&GestureSample::moving(-10.0, -0.2)), -10.0);
        assert_eq!(sampler.advance(&GestureSample::moving(-45.0, -0.4)), -45.0);

        let (delta, velocity) = sampler.finish(&GestureSample::end(-120.0, -0.55));
        assert_eq!(delta, -120.0);
        assert_eq!(velocity, -0.55);
        assert!(!sampler.is_active());
    }

    #[test]
    fn test_nan_delta_holds_previous_value() {
        let mut sampler = GestureSampler::new();
        sampler.begin();
        sampler.advance(&GestureSample::moving(-30.0, -0.1));

        let delta = sampler.advance(&GestureSample::moving(f64::NAN, -0.2));
        assert_eq!(delta, -30.0);
    }

    #[test]
    fn test_nan_velocity_reads_as_zero() {
        let mut sampler = GestureSampler::new();
        sampler.begin();
        sampler.advance(&GestureSample::moving(-30.0, -0.1));

        let (delta, velocity) = sampler.finish(&GestureSample::end(-30.0, f64::NAN));
        assert_eq!(delta, -30.0);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn test_infinite_delta_holds_previous_value() {
        let mut sampler = GestureSampler::new();
        sampler.begin();
        sampler.advance(&GestureSample::moving(25.0, 0.3));

        let delta = sampler.advance(&GestureSample::moving(f64::INFINITY, 0.3));
        assert_eq!(delta, 25.0);
    }

    #[test]
    fn test_begin_resets_previous_session() {
        let mut sampler = GestureSampler::new();
        sampler.begin();
        sampler.advance(&GestureSample::moving(-80.0, -0.4));
        sampler.finish(&GestureSample::end(-80.0, -0.4));

        sampler.begin();
        assert!(sampler.is_active());
        assert_eq!(sampler.advance(&GestureSample::moving(5.0, 0.1)), 5.0);
    }

    #[test]
    fn test_inactive_sampler_ignores_samples() {
        let mut sampler = GestureSampler::new();

        assert_eq!(sampler.advance(&GestureSample::moving(-50.0, -0.4)), 0.0);
        assert_eq!(sampler.finish(&GestureSample::end(-50.0, -0.4)), (0.0, 0.0));
    }
}
