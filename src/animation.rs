//! Animation primitives driving sheet motion and overlay fades
//!
//! Two flavors: `SpringAnimation` integrates a damped spring toward a target
//! (used for the sheet position, where release velocity matters), and
//! `TimedAnimation` interpolates over a fixed duration (used for overlay
//! opacity, which always fades in a known time).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest integration step in seconds. Bigger frame deltas are split into
/// substeps so a stalled frame can't make the spring explode.
const MAX_SPRING_STEP: f64 = 1.0 / 240.0;

/// Position error below which a spring is considered at rest (pixels).
const REST_DISTANCE: f64 = 0.5;

/// Velocity below which a spring is considered at rest (pixels/second).
const REST_VELOCITY: f64 = 10.0;

/// Spring tuning shared by position transitions.
///
/// Stiffness pulls toward the target, damping bleeds off velocity. Both are
/// plain per-second coefficients, so they round-trip through config files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_stiffness() -> f64 {
    220.0
}

fn default_damping() -> f64 {
    26.0
}

impl SpringParams {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::new(default_stiffness(), default_damping())
    }
}

/// A single scalar animated by a damped spring.
///
/// Integrates with semi-implicit Euler. The spring can be retargeted at any
/// time without losing its current value or velocity, which is what makes
/// mid-flight direction changes look continuous instead of jumping.
#[derive(Debug, Clone)]
pub struct SpringAnimation {
    value: f64,
    velocity: f64,
    target: f64,
    params: SpringParams,
    done: bool,
}

impl SpringAnimation {
    pub fn new(from: f64, target: f64, params: SpringParams) -> Self {
        Self {
            value: from,
            velocity: 0.0,
            target,
            params,
            done: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Redirect the spring toward a new target, keeping the current value and
    /// velocity so an interrupted transition continues from where it is.
    pub fn retarget(&mut self, target: f64, params: SpringParams) {
        self.target = target;
        self.params = params;
        self.done = false;
    }

    /// Advance by `dt`. Returns true if the value moved.
    ///
    /// When the spring comes to rest (close to target, nearly stopped) the
    /// value snaps to the target exactly and the animation reports done.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.done {
            return false;
        }
        let mut remaining = dt.as_secs_f64();
        if remaining <= 0.0 {
            return false;
        }

        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP);
            remaining -= step;

            let accel =
                self.params.stiffness * (self.target - self.value) - self.params.damping * self.velocity;
            self.velocity += accel * step;
            self.value += self.velocity * step;

            if (self.target - self.value).abs() < REST_DISTANCE
                && self.velocity.abs() < REST_VELOCITY
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.done = true;
                break;
            }
        }
        true
    }
}

/// Timing curve for fixed-duration animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map raw progress in [0, 1] through the curve. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// A single scalar interpolated from `from` to `to` over a fixed duration.
#[derive(Debug, Clone)]
pub struct TimedAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl TimedAnimation {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    /// Current interpolated value. Zero-duration animations are already at
    /// their end value.
    pub fn value(&self) -> f64 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`. Returns true if the value moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        true
    }
}
