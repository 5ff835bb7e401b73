//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the demo host:
//! - `app` - ApplicationHandler, window management, and software rendering

pub mod app;

pub use app::App;
