//! Overlay opacity fades
//!
//! The overlay chip sits on the collapsed sheet and fades out when the sheet
//! expands; it fades back in on collapse. Unlike the position, opacity runs
//! on fixed durations, and the two directions are deliberately different:
//! hiding is quicker than showing. Fades start at the same instant as the
//! position transition and run in parallel with it, never after it.

use std::time::Duration;

use crate::animation::{Easing, TimedAnimation};
use crate::config::SheetConfig;

/// Opacity of the collapsed-state overlay, in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct OverlayFade {
    anim: Option<TimedAnimation>,
    opacity: f64,
    hide: Duration,
    show: Duration,
    easing: Easing,
}

impl OverlayFade {
    /// New overlay, fully visible to match the collapsed sheet.
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            anim: None,
            opacity: 1.0,
            hide: Duration::from_millis(config.fade_out_ms),
            show: Duration::from_millis(config.fade_in_ms),
            easing: config.fade_easing,
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Fade toward invisible (the sheet is expanding).
    pub fn begin_hide(&mut self) {
        self.fade_to(0.0, self.hide);
    }

    /// Fade toward visible (the sheet is collapsing).
    pub fn begin_show(&mut self) {
        self.fade_to(1.0, self.show);
    }

    /// Advance the in-flight fade. Returns true while opacity is moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(anim) = self.anim.as_mut() else {
            return false;
        };
        let changed = anim.tick(dt);
        self.opacity = anim.value().clamp(0.0, 1.0);
        if anim.is_done() {
            self.anim = None;
        }
        changed
    }

    /// Start a fade from the current opacity. A fade already heading to the
    /// same target keeps running (repeat requests are idempotent); a fade to
    /// the other target is superseded from the current value, not queued.
    fn fade_to(&mut self, target: f64, duration: Duration) {
        if let Some(anim) = &self.anim {
            if anim.target() == target {
                return;
            }
        } else if self.opacity == target {
            return;
        }
        self.anim = Some(TimedAnimation::new(self.opacity, target, duration, self.easing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> OverlayFade {
        OverlayFade::new(&SheetConfig::default())
    }

    #[test]
    fn test_starts_fully_visible() {
        let overlay = fade();
        assert_eq!(overlay.opacity(), 1.0);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_hide_reaches_zero_in_its_duration() {
        let mut overlay = fade();
        overlay.begin_hide();

        overlay.tick(Duration::from_millis(75));
        assert!(overlay.opacity() < 1.0);
        assert!(overlay.opacity() > 0.0);

        overlay.tick(Duration::from_millis(75));
        assert_eq!(overlay.opacity(), 0.0);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_show_is_slower_than_hide() {
        let mut overlay = fade();
        overlay.begin_hide();
        overlay.tick(Duration::from_millis(150));
        assert_eq!(overlay.opacity(), 0.0);

        overlay.begin_show();
        // The hide duration is not enough to finish a show.
        overlay.tick(Duration::from_millis(150));
        assert!(overlay.is_animating());
        assert!(overlay.opacity() < 1.0);

        overlay.tick(Duration::from_millis(50));
        assert_eq!(overlay.opacity(), 1.0);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_reversed_fade_continues_from_current_opacity() {
        let mut overlay = fade();
        overlay.begin_hide();
        overlay.tick(Duration::from_millis(75));
        let mid = overlay.opacity();
        assert!(mid > 0.0 && mid < 1.0);

        overlay.begin_show();
        assert_eq!(overlay.opacity(), mid);

        overlay.tick(Duration::from_millis(200));
        assert_eq!(overlay.opacity(), 1.0);
    }

    #[test]
    fn test_repeated_hide_does_not_restart() {
        let mut overlay = fade();
        overlay.begin_hide();
        overlay.tick(Duration::from_millis(100));

        overlay.begin_hide();
        overlay.tick(Duration::from_millis(50));

        // 150 ms total: the fade finished; a restart would still be mid-fade.
        assert_eq!(overlay.opacity(), 0.0);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_show_when_already_visible_is_noop() {
        let mut overlay = fade();
        overlay.begin_show();
        assert!(!overlay.is_animating());
        assert_eq!(overlay.opacity(), 1.0);
    }

    #[test]
    fn test_idle_tick_reports_no_change() {
        let mut overlay = fade();
        assert!(!overlay.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_opacity_stays_in_unit_range() {
        let mut overlay = fade();
        overlay.begin_hide();
        for _ in 0..40 {
            overlay.tick(Duration::from_millis(10));
            assert!(overlay.opacity() >= 0.0);
            assert!(overlay.opacity() <= 1.0);
        }
    }
}
