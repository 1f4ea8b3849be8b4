//! Configuration file loading with precedence handling.

use super::{ItemSizing, LayoutConfig, Preset, SpacingPolicy};
use crate::geometry::Size;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A layout tunable is out of range.
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, the preset's values are used.
/// Corresponds to `~/.config/looplayout/config.toml`.
///
/// ```toml
/// preset = "dial"
/// min_spacing = 24.0
/// zoom_factor = 0.3
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Starting preset (`dial` or `loop`).
    #[serde(default)]
    pub preset: Option<Preset>,

    /// Fixed item width. Implies fixed sizing.
    #[serde(default)]
    pub item_width: Option<f64>,

    /// Fixed item height. Implies fixed sizing.
    #[serde(default)]
    pub item_height: Option<f64>,

    /// Square items sized as a fraction of the viewport height.
    #[serde(default)]
    pub item_height_fraction: Option<f64>,

    /// Constant spacing between items. Disables negotiation.
    #[serde(default)]
    pub spacing: Option<f64>,

    /// Minimum spacing for negotiated spacing.
    #[serde(default)]
    pub min_spacing: Option<f64>,

    /// Peeking fraction for negotiated spacing.
    #[serde(default)]
    pub peeking_factor: Option<f64>,

    /// Zoom factor at the center.
    #[serde(default)]
    pub zoom_factor: Option<f64>,

    /// Fraction of the viewport width where zoom applies.
    #[serde(default)]
    pub active_zoom_fraction: Option<f64>,

    /// Arc sagitta as a fraction of viewport height.
    #[serde(default)]
    pub arc_intersect_fraction: Option<f64>,

    /// Enable or disable the arc entirely.
    #[serde(default)]
    pub arc: Option<bool>,

    /// Virtual inset on each side of the looped content.
    #[serde(default)]
    pub inset_width: Option<f64>,

    /// Number of laps in the virtual content.
    #[serde(default)]
    pub content_multiple: Option<u32>,

    /// Allow wrapping.
    #[serde(default)]
    pub wrap: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Layout tunables.
    pub layout: LayoutConfig,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/looplayout/looplayout.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("looplayout").join("looplayout.log")
    } else {
        PathBuf::from("looplayout.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/looplayout/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("looplayout").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `LOOPLAYOUT_CONFIG` environment variable
/// 3. Default path `~/.config/looplayout/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LOOPLAYOUT_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a boolean environment value (`true/false/1/0/yes/no`).
fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LOOPLAYOUT_WRAP`: Override whether wrapping is allowed.
///   Unrecognised values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(wrap) = std::env::var("LOOPLAYOUT_WRAP")
        .ok()
        .as_deref()
        .and_then(parse_env_bool)
    {
        config.layout.wrap = wrap;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// The file's `preset` (or the default dial) supplies the starting values;
/// every `Some` field in the file then replaces the matching tunable.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(file) = config_file else {
        return defaults;
    };

    let mut layout = file
        .preset
        .map(Preset::config)
        .unwrap_or(defaults.layout);

    match (file.item_width, file.item_height) {
        (Some(w), Some(h)) => layout.item_sizing = ItemSizing::Fixed(Size::new(w, h)),
        (Some(side), None) | (None, Some(side)) => {
            layout.item_sizing = ItemSizing::Fixed(Size::new(side, side));
        }
        (None, None) => {
            if let Some(fraction) = file.item_height_fraction {
                layout.item_sizing = ItemSizing::HeightFraction(fraction);
            }
        }
    }

    if let Some(spacing) = file.spacing {
        layout.spacing = SpacingPolicy::Fixed(spacing);
    } else if file.min_spacing.is_some() || file.peeking_factor.is_some() {
        let (min_base, peek_base) = match layout.spacing {
            SpacingPolicy::Negotiated {
                min_spacing,
                peeking_factor,
            } => (min_spacing, peeking_factor),
            SpacingPolicy::Fixed(spacing) => (spacing, 0.25),
        };
        layout.spacing = SpacingPolicy::Negotiated {
            min_spacing: file.min_spacing.unwrap_or(min_base),
            peeking_factor: file.peeking_factor.unwrap_or(peek_base),
        };
    }

    layout.zoom_factor = file.zoom_factor.unwrap_or(layout.zoom_factor);
    layout.active_zoom_fraction = file
        .active_zoom_fraction
        .unwrap_or(layout.active_zoom_fraction);

    if let Some(fraction) = file.arc_intersect_fraction {
        layout.arc_intersect_fraction = Some(fraction);
    }
    if file.arc == Some(false) {
        layout.arc_intersect_fraction = None;
    } else if file.arc == Some(true) && layout.arc_intersect_fraction.is_none() {
        layout.arc_intersect_fraction = LayoutConfig::dial().arc_intersect_fraction;
    }

    layout.inset_width = file.inset_width.unwrap_or(layout.inset_width);
    layout.content_multiple = file.content_multiple.unwrap_or(layout.content_multiple);
    layout.wrap = file.wrap.unwrap_or(layout.wrap);

    ResolvedConfig {
        layout,
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// A preset override replaces the whole layout configuration; the wrap
/// override is applied on top of it.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    preset_override: Option<Preset>,
    wrap_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(preset) = preset_override {
        config.layout = preset.config();
    }

    if let Some(wrap) = wrap_override {
        config.layout.wrap = wrap;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
