//! Configuration module.
//!
//! `LayoutConfig` holds the tunables of the loop layout. The `loader`
//! submodule reads them from TOML and applies precedence rules.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Named starting points for a layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Negotiated spacing, zoom and arc.
    Dial,
    /// Fixed 80x80 items, constant spacing, no transforms.
    Loop,
}

impl Preset {
    /// The layout configuration this preset stands for.
    pub fn config(self) -> LayoutConfig {
        match self {
            Self::Dial => LayoutConfig::dial(),
            Self::Loop => LayoutConfig::plain_loop(),
        }
    }
}

/// How item sizes are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ItemSizing {
    /// Every item has exactly this size.
    Fixed(Size),
    /// Square items whose side is this fraction of the viewport height.
    HeightFraction(f64),
}

impl ItemSizing {
    /// Resolve to a concrete item size for a viewport of the given height.
    pub fn resolve(&self, viewport_height: f64) -> Size {
        match *self {
            Self::Fixed(size) => size,
            Self::HeightFraction(fraction) => {
                let side = viewport_height * fraction;
                Size::new(side, side)
            }
        }
    }
}

/// How the horizontal gap between neighbouring items is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SpacingPolicy {
    /// Constant gap.
    Fixed(f64),
    /// Gap negotiated against the viewport so edge items peek in by a
    /// fraction of their width.
    Negotiated {
        /// Lower bound added to the zoom padding before negotiation.
        min_spacing: f64,
        /// Fraction of an item's width left visible at each edge.
        peeking_factor: f64,
    },
}

/// Tunables for the loop layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    /// Item size policy.
    pub item_sizing: ItemSizing,
    /// Spacing policy.
    pub spacing: SpacingPolicy,
    /// Relative size increase of an item at the exact center (0.2 = 20%).
    pub zoom_factor: f64,
    /// Fraction of the viewport width, measured from the center, in which zoom applies.
    pub active_zoom_fraction: f64,
    /// Arc sagitta as a fraction of viewport height. `None` disables the arc.
    pub arc_intersect_fraction: Option<f64>,
    /// Virtual inset on each side of the looped content.
    ///
    /// Must be large enough that a fast fling comes to rest before reaching
    /// the scroll surface's bounce edge.
    pub inset_width: f64,
    /// Number of laps laid out in the virtual content when wrapping.
    pub content_multiple: u32,
    /// Allow wrapping at all. Wrapping still requires enough content and no
    /// active accessibility navigation.
    pub wrap: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::dial()
    }
}

impl LayoutConfig {
    /// The full-featured dial: negotiated spacing, zoom and arc.
    pub fn dial() -> Self {
        Self {
            item_sizing: ItemSizing::HeightFraction(0.40),
            spacing: SpacingPolicy::Negotiated {
                min_spacing: 20.0,
                peeking_factor: 0.25,
            },
            zoom_factor: 0.2,
            active_zoom_fraction: 0.4,
            arc_intersect_fraction: Some(0.99),
            inset_width: 16_000.0,
            content_multiple: 10,
            wrap: true,
        }
    }

    /// A flat loop of fixed 80x80 items with constant spacing and no transforms.
    pub fn plain_loop() -> Self {
        Self {
            item_sizing: ItemSizing::Fixed(Size::new(80.0, 80.0)),
            spacing: SpacingPolicy::Fixed(20.0),
            zoom_factor: 0.0,
            active_zoom_fraction: 0.4,
            arc_intersect_fraction: None,
            inset_width: 16_000.0,
            content_multiple: 10,
            wrap: true,
        }
    }

    /// Check that every tunable is in range.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        match self.item_sizing {
            ItemSizing::Fixed(size) if size.is_degenerate() => {
                return Err(invalid("item_size", "width and height must be positive"));
            }
            ItemSizing::HeightFraction(f) if !(f > 0.0 && f <= 1.0) => {
                return Err(invalid("item_height_fraction", format!("{f} not in (0, 1]")));
            }
            _ => {}
        }

        match self.spacing {
            SpacingPolicy::Fixed(s) if s < 0.0 => {
                return Err(invalid("spacing", format!("{s} is negative")));
            }
            SpacingPolicy::Negotiated {
                min_spacing,
                peeking_factor,
            } => {
                if min_spacing < 0.0 {
                    return Err(invalid("min_spacing", format!("{min_spacing} is negative")));
                }
                if !(0.0..0.5).contains(&peeking_factor) {
                    return Err(invalid(
                        "peeking_factor",
                        format!("{peeking_factor} not in [0, 0.5)"),
                    ));
                }
            }
            _ => {}
        }

        if self.zoom_factor < 0.0 {
            return Err(invalid("zoom_factor", "must not be negative"));
        }
        if !(self.active_zoom_fraction > 0.0) {
            return Err(invalid("active_zoom_fraction", "must be positive"));
        }
        if let Some(f) = self.arc_intersect_fraction {
            if !(f > 0.0) {
                return Err(invalid("arc_intersect_fraction", "must be positive"));
            }
        }
        if !(self.inset_width > 0.0) {
            return Err(invalid("inset_width", "must be positive"));
        }
        if self.content_multiple < 2 {
            return Err(invalid("content_multiple", "must be at least 2"));
        }
        Ok(())
    }

    /// Size of an item at maximum zoom, for a viewport of the given height.
    pub fn max_item_size(&self, viewport_height: f64) -> Size {
        self.item_sizing
            .resolve(viewport_height)
            .scaled(1.0 + self.zoom_factor)
    }
}
