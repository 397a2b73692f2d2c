//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Poster layout and copy tuning.
    #[serde(default)]
    pub poster: PosterConfig,
}

/// Poster tuning values. All of these are visual knobs, not business
/// logic; the layout formulas that consume them are fixed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Height of each member cell.
    pub cell_height: u32,
    /// Vertical offset of the first cell row.
    pub start_y: u32,
    /// Vertical offset of the title baseline area.
    pub title_y: u32,
    /// Smallest icon size in pixels.
    pub icon_min: u32,
    /// Largest icon size in pixels.
    pub icon_max: u32,
    /// Icon size at age zero.
    pub icon_base: u32,
    /// Icon pixels added per year of age.
    pub icon_age_scale: f32,
    /// Poster title text.
    pub title: String,
    /// Protest message lines drawn below the member grid.
    pub messages: Vec<String>,
    /// Explicit TrueType font path; when unset, discovery falls back to
    /// `SIRENGEN_FONT` and then common system font locations.
    pub font_path: Option<String>,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1600,
            cell_height: 270,
            start_y: 180,
            title_y: 60,
            icon_min: 45,
            icon_max: 120,
            icon_base: 45,
            icon_age_scale: 0.75,
            title: "My First Siren".to_string(),
            messages: vec!["End This War Now!".to_string(), "Bring Them Home Now!".to_string()],
            font_path: None,
        }
    }
}

impl PosterConfig {
    /// Reject degenerate tuning values before rendering starts.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("poster.width and poster.height must be positive".to_string());
        }
        if self.cell_height == 0 {
            return Err("poster.cell_height must be positive".to_string());
        }
        if self.icon_min == 0 {
            return Err("poster.icon_min must be at least 1".to_string());
        }
        if self.icon_min > self.icon_max {
            return Err(format!(
                "poster.icon_min ({}) must not exceed poster.icon_max ({})",
                self.icon_min, self.icon_max
            ));
        }
        if self.icon_age_scale < 0.0 {
            return Err("poster.icon_age_scale must not be negative".to_string());
        }
        if self.messages.is_empty() {
            return Err("poster.messages must contain at least one line".to_string());
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `SIRENGEN_CONFIG` environment variable
/// 3. `~/.config/sirengen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("SIRENGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/sirengen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/sirengen/config.toml")
    } else {
        PathBuf::from("sirengen.toml")
    }
}
