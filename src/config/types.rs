//! Configuration type definitions.

use super::enums::{ColorSpec, ToolbarPosition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool defaults.
///
/// Controls the pen the note opens with. Users change tools at runtime
/// through the toolbar; these only seed the initial selection.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (black, blue, red, green,
    /// orange, purple) or an RGB array like `[60, 40, 200]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen stroke width in pixels (valid range: 0.5 - 24.0)
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Toolbar palette contents.
///
/// Fixed, ordered sequences: the toolbar renders one swatch per color and
/// one width control per entry, in the order listed. These are static
/// configuration, not runtime-mutable state.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Ordered ink swatches shown in the toolbar
    #[serde(default = "default_palette_colors")]
    pub colors: Vec<ColorSpec>,

    /// Ordered stroke width presets in pixels (each in range 0.5 - 24.0)
    #[serde(default = "default_palette_widths")]
    pub widths: Vec<f64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette_colors(),
            widths: default_palette_widths(),
        }
    }
}

/// Grid-paper page settings.
///
/// The page has fixed horizontal bounds and scrolls vertically; the grid is
/// a static background behind the ink.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PageConfig {
    /// Grid cell size in pixels (valid range: 8.0 - 64.0)
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f64,

    /// Page width in pixels - horizontal bounds are fixed, no horizontal
    /// scrolling (valid range: 320.0 - 2048.0)
    #[serde(default = "default_page_width")]
    pub page_width: f64,

    /// Grid rule color (defaults to pale grid-paper blue)
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorSpec,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_spacing: default_grid_spacing(),
            page_width: default_page_width(),
            grid_color: default_grid_color(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the tool toolbar
    #[serde(default = "default_show_toolbar")]
    pub show_toolbar: bool,

    /// Toolbar placement (top, bottom, left, right)
    #[serde(default = "default_toolbar_position")]
    pub toolbar_position: ToolbarPosition,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_toolbar: default_show_toolbar(),
            toolbar_position: default_toolbar_position(),
        }
    }
}

// ============================================================================
// Serde default functions
// ============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    3.0
}

fn default_palette_colors() -> Vec<ColorSpec> {
    ["black", "blue", "red", "green", "orange", "purple"]
        .iter()
        .map(|name| ColorSpec::Name((*name).to_string()))
        .collect()
}

fn default_palette_widths() -> Vec<f64> {
    vec![1.5, 3.0, 4.5, 6.0]
}

fn default_grid_spacing() -> f64 {
    24.0
}

fn default_page_width() -> f64 {
    800.0
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::Rgb([181, 209, 235])
}

fn default_show_toolbar() -> bool {
    true
}

fn default_toolbar_position() -> ToolbarPosition {
    ToolbarPosition::Top
}
