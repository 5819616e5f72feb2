//! Drawing tool selection.

use super::color::Color;

/// The active drawing tool.
///
/// Exactly one variant is active at a time; there is no partial or empty tool
/// state. The selection determines how subsequent strokes committed to the
/// drawing surface behave: [`ToolSelection::Pen`] lays down ink,
/// [`ToolSelection::Eraser`] removes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolSelection {
    /// Ink pen with a concrete color and stroke width in pixels
    Pen {
        /// Ink color for strokes drawn with this selection
        color: Color,
        /// Stroke width in pixels (always positive)
        width: f64,
    },
    /// Eraser - removes ink from strokes it passes over
    Eraser,
}

impl ToolSelection {
    /// Returns true when the eraser is the active tool.
    pub fn is_eraser(&self) -> bool {
        matches!(self, ToolSelection::Eraser)
    }

    /// Human-readable tool name for status display.
    pub fn label(&self) -> &'static str {
        match self {
            ToolSelection::Pen { .. } => "pen",
            ToolSelection::Eraser => "eraser",
        }
    }
}
