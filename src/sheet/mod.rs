//! The collapsible bottom sheet
//!
//! A bottom-anchored panel that peeks above the bottom edge when collapsed
//! and slides up to full height when expanded, with an accordion of tabs
//! inside it.
//!
//! ## Architecture
//!
//! - `SheetPosition`: offset state machine (drag tracking, release decision,
//!   settle spring)
//! - `OverlayFade`: opacity of the collapsed-state overlay, on fixed-length
//!   fades
//! - `HeaderDrag`: drag-down-to-collapse rule for the header strip
//! - `AccordionTabs`: exclusive tab list (at most one expanded)
//! - `SheetController`: owns all of the above and enforces the cross-cutting
//!   rules
//!
//! ## Integration
//!
//! Hit regions come from `hit_test::SheetLayout` / `route_gesture`; gesture
//! samples come from `gesture::PointerTracker` or any equivalent source.

mod controller;
mod header;
mod overlay;
mod position;
mod tabs;

pub use controller::SheetController;
pub use header::HeaderDrag;
pub use overlay::OverlayFade;
pub use position::{resolve_release, SheetPhase, SheetPosition};
pub use tabs::{AccordionTabs, TabEntry};
