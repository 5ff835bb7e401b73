//! Sheet configuration persistence
//!
//! Stores tuning knobs in `~/.config/peeksheet/config.yaml`

use serde::{Deserialize, Serialize};

use crate::animation::{Easing, SpringParams};

/// Thresholds for the whole-panel release decision
///
/// Distance and velocity are alternatives: crossing either one commits the
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragThresholds {
    /// Travel since gesture start that commits a transition (px)
    #[serde(default = "default_drag_distance")]
    pub distance_px: f64,
    /// Release velocity that commits a transition (px/ms)
    #[serde(default = "default_drag_velocity")]
    pub velocity_px_ms: f64,
}

fn default_drag_distance() -> f64 {
    100.0
}

fn default_drag_velocity() -> f64 {
    0.5
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            distance_px: default_drag_distance(),
            velocity_px_ms: default_drag_velocity(),
        }
    }
}

/// Thresholds for the header drag-to-collapse rule
///
/// The header works in px and px/s (not px/ms): it sees one discrete
/// end-state reading per gesture rather than a sample stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderThresholds {
    /// Downward translation that collapses the sheet (px)
    #[serde(default = "default_header_translation")]
    pub translation_px: f64,
    /// Downward velocity that collapses the sheet (px/s)
    #[serde(default = "default_header_velocity")]
    pub velocity_px_s: f64,
}

fn default_header_translation() -> f64 {
    50.0
}

fn default_header_velocity() -> f64 {
    300.0
}

impl Default for HeaderThresholds {
    fn default() -> Self {
        Self {
            translation_px: default_header_translation(),
            velocity_px_s: default_header_velocity(),
        }
    }
}

/// Sheet tuning that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// How far the collapsed sheet peeks above the bottom edge (px).
    /// Also the full travel distance of the expand/collapse transition.
    #[serde(default = "default_peek_height")]
    pub peek_height: f64,

    #[serde(default)]
    pub drag: DragThresholds,

    #[serde(default)]
    pub header: HeaderThresholds,

    /// Spring for the opening transition (stiffer: opening should feel eager)
    #[serde(default = "default_open_spring")]
    pub open_spring: SpringParams,

    /// Spring for the closing transition
    #[serde(default = "default_close_spring")]
    pub close_spring: SpringParams,

    /// Overlay fade-out duration when the sheet expands (ms)
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,

    /// Overlay fade-in duration when the sheet collapses (ms)
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,

    #[serde(default)]
    pub fade_easing: Easing,
}

fn default_peek_height() -> f64 {
    150.0
}

fn default_open_spring() -> SpringParams {
    SpringParams::new(220.0, 26.0)
}

fn default_close_spring() -> SpringParams {
    SpringParams::new(170.0, 24.0)
}

fn default_fade_out_ms() -> u64 {
    150
}

fn default_fade_in_ms() -> u64 {
    200
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            peek_height: default_peek_height(),
            drag: DragThresholds::default(),
            header: HeaderThresholds::default(),
            open_spring: default_open_spring(),
            close_spring: default_close_spring(),
            fade_out_ms: default_fade_out_ms(),
            fade_in_ms: default_fade_in_ms(),
            fade_easing: Easing::Linear,
        }
    }
}

impl SheetConfig {
    /// Preset for the spotter profile screen
    pub fn spotter_profile() -> Self {
        Self {
            peek_height: 150.0,
            ..Self::default()
        }
    }

    /// Preset for the artist profile screen
    pub fn artist_profile() -> Self {
        Self {
            peek_height: 180.0,
            ..Self::default()
        }
    }

    /// Preset for the venue profile screen
    pub fn venue_profile() -> Self {
        Self {
            peek_height: 190.0,
            ..Self::default()
        }
    }

    /// Preset for the band profile screen
    pub fn band_profile() -> Self {
        Self {
            peek_height: 150.0,
            ..Self::default()
        }
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
