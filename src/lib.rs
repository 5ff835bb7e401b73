//! Peeksheet - gesture-driven collapsible bottom sheet
//!
//! This crate provides the state machine for a draggable bottom sheet that
//! snaps between a collapsed peek strip and a fully expanded panel, plus the
//! pieces around it: release-decision rules, spring and timed animations,
//! a cross-faded host overlay, and an exclusive accordion for the panel's
//! tabs. A winit/softbuffer demo host lives in `runtime` and `view`.

pub mod animation;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod gesture;
pub mod hit_test;
pub mod runtime;
pub mod sheet;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::SheetConfig;
pub use gesture::{GesturePhase, GestureSample, HeaderRelease};
pub use sheet::{AccordionTabs, SheetController, SheetPhase, TabEntry};
