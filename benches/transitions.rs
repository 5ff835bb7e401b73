//! Benchmarks for sheet transitions and the release decision rule
//!
//! Run with: cargo bench transitions

mod support;
use support::{make_controller, scripted_drag, settle, FRAME};

use std::time::Duration;

use peeksheet::animation::{SpringAnimation, SpringParams};
use peeksheet::config::DragThresholds;
use peeksheet::sheet::resolve_release;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Release decision (pure rule)
// ============================================================================

#[divan::bench(args = [100, 10_000])]
fn resolve_release_mixed(iterations: usize) {
    let thresholds = DragThresholds::default();

    for i in 0..iterations {
        let delta = -((i % 200) as f64);
        let velocity = -((i % 10) as f64) / 10.0;
        let decision = resolve_release(i % 2 == 0, delta, velocity, &thresholds);
        divan::black_box(decision);
    }
}

// ============================================================================
// Spring stepping
// ============================================================================

#[divan::bench(args = [150.0, 400.0])]
fn spring_settle_from(distance: f64) {
    let params = SpringParams::new(220.0, 26.0);
    let mut spring = SpringAnimation::new(distance, 0.0, params);

    for _ in 0..600 {
        if !spring.tick(Duration::from_millis(16)) {
            break;
        }
    }
    divan::black_box(spring.value());
}

// ============================================================================
// Full controller sessions
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn drag_session_with_settle(samples: usize) {
    let mut controller = make_controller();
    scripted_drag(&mut controller, samples, -140.0);
    settle(&mut controller);
    divan::black_box(controller.offset());
}

#[divan::bench]
fn expand_collapse_cycle() {
    let mut controller = make_controller();

    controller.expand();
    settle(&mut controller);
    controller.toggle_tab("albums");
    controller.collapse();
    settle(&mut controller);

    divan::black_box(controller.overlay_opacity());
}

#[divan::bench(args = [60, 600])]
fn idle_ticks(frames: usize) {
    let mut controller = make_controller();

    for _ in 0..frames {
        divan::black_box(controller.tick(FRAME));
    }
}
