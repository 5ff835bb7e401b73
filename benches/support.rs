//! Shared helpers for benchmarks

use std::time::Duration;

use peeksheet::config::SheetConfig;
use peeksheet::{GestureSample, SheetController, TabEntry};

/// Frame step used when driving animations (60 fps).
#[allow(dead_code)]
pub const FRAME: Duration = Duration::from_millis(16);

/// Controller with the demo's three tabs.
#[allow(dead_code)]
pub fn make_controller() -> SheetController<u32> {
    let mut controller = SheetController::new(SheetConfig::default());
    controller.add_tab(TabEntry::new("songs", "Songs", 1));
    controller.add_tab(TabEntry::new("albums", "Albums", 2));
    controller.add_tab(TabEntry::new("shows", "Shows", 3));
    controller
}

/// Drive the controller until everything is at rest.
#[allow(dead_code)]
pub fn settle(controller: &mut SheetController<u32>) {
    for _ in 0..600 {
        if !controller.tick(FRAME) {
            break;
        }
    }
}

/// One scripted drag session: grab, evenly spaced move samples, release.
#[allow(dead_code)]
pub fn scripted_drag(controller: &mut SheetController<u32>, samples: usize, total_delta: f64) {
    controller.on_gesture(GestureSample::start());
    for i in 1..=samples {
        let delta = total_delta * i as f64 / samples as f64;
        controller.on_gesture(GestureSample::moving(delta, -0.4));
    }
    controller.on_gesture(GestureSample::end(total_delta, -0.4));
}
