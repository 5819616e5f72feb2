//! Stroke records committed to the note page.

use super::tool::ToolSelection;

/// A single committed stroke: the path the stylus traced plus the tool that
/// was active when it was committed.
///
/// Eraser passes are recorded as strokes too - the undo history is a linear
/// log of committed mutations, and an erase is as undoable as an ink stroke.
/// Pixel-level erase compositing happens in the rendering layer, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Sequence of (x, y) page coordinates traced by the stylus
    pub points: Vec<(i32, i32)>,
    /// Tool that produced this stroke
    pub tool: ToolSelection,
}

impl Stroke {
    /// Creates a stroke from a traced path and the tool that drew it.
    pub fn new(points: Vec<(i32, i32)>, tool: ToolSelection) -> Self {
        Self { points, tool }
    }

    /// Largest y coordinate touched by this stroke, if it has any points.
    ///
    /// Used by the page view to grow the scrollable content height.
    pub fn max_y(&self) -> Option<i32> {
        self.points.iter().map(|&(_, y)| y).max()
    }
}
