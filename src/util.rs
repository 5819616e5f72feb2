//! Utility functions for color name mapping.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps a color name from config or session commands to a [`Color`].
///
/// # Supported Names (case-insensitive)
/// - `black`, `blue`, `red`, `green`, `orange`, `purple`
///
/// # Returns
/// The matching color, or `None` for unknown names.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "blue" => Some(BLUE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        _ => None,
    }
}

/// Maps a [`Color`] back to its palette name for status display.
///
/// Colors that don't match a predefined ink return `"custom"`.
pub fn color_to_name(color: &Color) -> &'static str {
    if *color == BLACK {
        "black"
    } else if *color == BLUE {
        "blue"
    } else if *color == RED {
        "red"
    } else if *color == GREEN {
        "green"
    } else if *color == ORANGE {
        "orange"
    } else if *color == PURPLE {
        "purple"
    } else {
        "custom"
    }
}
