//! Header strip drag-to-collapse
//!
//! The header recognizer is intentionally simpler than the panel drag: it
//! looks at one discrete end-state reading per gesture and works in its own
//! units (px of translation, px/s of velocity). It only ever requests a
//! collapse, and only while the sheet is expanded.

use crate::config::HeaderThresholds;
use crate::gesture::HeaderRelease;

#[derive(Debug, Clone)]
pub struct HeaderDrag {
    thresholds: HeaderThresholds,
}

impl HeaderDrag {
    pub fn new(thresholds: HeaderThresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate a header release. True means the sheet should collapse.
    ///
    /// Enough downward translation or enough downward velocity triggers
    /// (OR, never AND). Inert while the sheet is not expanded. Non-finite
    /// readings count as zero motion.
    pub fn should_collapse(&self, release: &HeaderRelease, expanded: bool) -> bool {
        if !expanded {
            return false;
        }
        let translation_y = if release.translation_y.is_finite() {
            release.translation_y
        } else {
            0.0
        };
        let velocity_y = if release.velocity_y.is_finite() {
            release.velocity_y
        } else {
            0.0
        };

        let collapse = translation_y > self.thresholds.translation_px
            || velocity_y > self.thresholds.velocity_px_s;
        if collapse {
            tracing::debug!(translation_y, velocity_y, "header drag collapses sheet");
        }
        collapse
    }
}
