//! Command-line argument parsing for the demo host
//!
//! Supports:
//! - Selecting a host screen preset (each screen ships its own peek height)
//! - Overriding the peek height directly
//! - Choosing the window size

use clap::Parser;

use crate::config::SheetConfig;

/// Bottom sheet demo host
#[derive(Parser, Debug)]
#[command(name = "peeksheet-demo", version, about = "Bottom sheet demo host")]
pub struct CliArgs {
    /// Host screen preset: spotter, artist, venue, or band
    #[arg(long, value_name = "SCREEN")]
    pub screen: Option<String>,

    /// Override the collapsed peek height in pixels
    #[arg(long, value_name = "PX")]
    pub peek: Option<f64>,

    /// Window width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Sheet tuning for the demo controller
    pub sheet: SheetConfig,
    /// Inner window size (width, height)
    pub window_size: (u32, u32),
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// `base` is the sheet config loaded from disk. A `--screen` preset
    /// replaces it wholesale; an explicit `--peek` overrides the peek height
    /// on top of either.
    pub fn into_config(self, base: SheetConfig) -> Result<StartupConfig, String> {
        let mut sheet = match self.screen.as_deref() {
            None => base,
            Some("spotter") => SheetConfig::spotter_profile(),
            Some("artist") => SheetConfig::artist_profile(),
            Some("venue") => SheetConfig::venue_profile(),
            Some("band") => SheetConfig::band_profile(),
            Some(other) => {
                return Err(format!(
                    "Unknown screen '{}' (expected spotter, artist, venue, or band)",
                    other
                ))
            }
        };

        if let Some(peek) = self.peek {
            if !peek.is_finite() || peek <= 0.0 {
                return Err(format!("Invalid peek height {}", peek));
            }
            sheet.peek_height = peek;
        }

        let width = self.width.unwrap_or(420);
        let height = self.height.unwrap_or(760);
        if width == 0 || height == 0 {
            return Err("Window dimensions must be non-zero".to_string());
        }

        Ok(StartupConfig {
            sheet,
            window_size: (width, height),
        })
    }
}
