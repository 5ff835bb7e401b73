//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use peeksheet::config::SheetConfig;
use peeksheet::{GestureSample, SheetController, TabEntry};

/// Frame step used by the animation-driving helpers (60 fps).
pub const FRAME: Duration = Duration::from_millis(16);

/// Controller with the default config and the demo's three tabs.
pub fn test_controller() -> SheetController<u32> {
    let mut controller = SheetController::new(SheetConfig::default());
    controller.add_tab(TabEntry::new("songs", "Songs", 1));
    controller.add_tab(TabEntry::new("albums", "Albums", 2));
    controller.add_tab(TabEntry::new("shows", "Shows", 3));
    controller
}

/// Tick the controller until every animation settles.
///
/// Panics if nothing settles within a generous frame budget so a broken
/// spring shows up as a test failure instead of a hang.
pub fn run_to_rest(controller: &mut SheetController<u32>) {
    for _ in 0..600 {
        if !controller.tick(FRAME) {
            return;
        }
    }
    panic!("animations did not settle within 600 frames");
}

/// Scripted pan gesture: start, one move, and a release with the given
/// cumulative delta (px, positive down) and velocity (px/ms).
pub fn pan(controller: &mut SheetController<u32>, delta_y: f64, velocity_y: f64) {
    controller.on_gesture(GestureSample::start());
    controller.on_gesture(GestureSample::moving(delta_y, velocity_y));
    controller.on_gesture(GestureSample::end(delta_y, velocity_y));
}

/// Expand the sheet and let it settle.
pub fn expand_and_rest(controller: &mut SheetController<u32>) {
    controller.expand();
    run_to_rest(controller);
    assert!(controller.is_expanded());
    assert_eq!(controller.offset(), 0.0);
}
