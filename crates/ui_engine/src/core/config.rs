//! # UI Configuration
//!
//! Configuration structures for the composition layer. Everything here is
//! plain data that can be loaded from TOML or RON through [`Config`].
//!
//! ## Configuration Categories
//!
//! - **Viewport**: size of the surface panels are composed onto
//! - **Style Metrics**: chrome and spacing dimensions used by layout and hit testing
//! - **State**: lifetime policy of persistent per-widget state

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Chrome and spacing dimensions, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleMetrics {
    /// Height of a panel's title bar
    pub title_bar_height: f32,
    /// Inset between the panel frame and its content area
    pub panel_padding: f32,
    /// Inset applied when drawing a widget inside its resolved slot
    pub item_padding: f32,
    /// Width of panel and widget borders
    pub border_width: f32,
    /// Side length of the square resize grip at the bottom-right corner
    pub resize_grip: f32,
    /// Smallest size a panel can be resized to (width, height)
    pub min_panel_size: (f32, f32),
    /// Horizontal advance per character for the built-in monospace measure
    pub glyph_advance: f32,
    /// Line height for text runs
    pub line_height: f32,
    /// Pixels scrolled per scroll wheel step
    pub scroll_step: f32,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: 24.0,
            panel_padding: 4.0,
            item_padding: 2.0,
            border_width: 1.0,
            resize_grip: 12.0,
            min_panel_size: (64.0, 48.0),
            glyph_advance: 8.0,
            line_height: 16.0,
            scroll_step: 20.0,
        }
    }
}

/// Persistent widget state policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Frames an identity may go undeclared before its state is evicted
    pub eviction_grace_frames: u64,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self { eviction_grace_frames: 1 }
    }
}

/// # UI Configuration
///
/// Top-level configuration handed to [`crate::ui::UIContext::with_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Viewport size in pixels (width, height)
    pub viewport: (f32, f32),
    /// Chrome and spacing dimensions
    pub style: StyleMetrics,
    /// Persistent state policy
    pub state: StateConfig,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            viewport: (800.0, 600.0),
            style: StyleMetrics::default(),
            state: StateConfig::default(),
        }
    }
}

impl Config for UIConfig {}

impl UIConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let (w, h) = self.viewport;
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(format!("Viewport must be positive, got {}x{}", w, h));
        }
        let style = &self.style;
        for (name, value) in [
            ("title_bar_height", style.title_bar_height),
            ("panel_padding", style.panel_padding),
            ("item_padding", style.item_padding),
            ("border_width", style.border_width),
            ("resize_grip", style.resize_grip),
            ("glyph_advance", style.glyph_advance),
            ("line_height", style.line_height),
            ("scroll_step", style.scroll_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("Style metric {} must be non-negative, got {}", name, value));
            }
        }
        Ok(())
    }
}
