//! In-process note page implementing the drawing surface contract.

use super::DrawingSurface;
use crate::draw::{BLACK, Stroke, ToolSelection};

/// Headless note page: a linear log of committed strokes plus a redo stack.
///
/// Stands in for the platform canvas in the command shell and in tests.
/// Strokes are recorded in commit order (first = bottom layer); undo pops the
/// most recent record onto the redo stack, and committing a new stroke
/// discards the redo stack, as stroke history is linear.
pub struct NotePage {
    /// Committed strokes in draw order
    strokes: Vec<Stroke>,
    /// Strokes removed by undo, most recently undone last
    undone: Vec<Stroke>,
    /// Tool applied to the next committed stroke
    active_tool: ToolSelection,
}

impl NotePage {
    /// Creates an empty page with a default black pen.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            undone: Vec::new(),
            active_tool: ToolSelection::Pen {
                color: BLACK,
                width: 3.0,
            },
        }
    }

    /// Records a stroke traced with the currently active tool.
    ///
    /// Committing clears the redo stack: once the user draws past an undo,
    /// the undone future is gone. Empty paths are ignored - the platform
    /// never reports a stroke without points.
    pub fn commit_stroke(&mut self, points: Vec<(i32, i32)>) {
        if points.is_empty() {
            log::debug!("Ignoring empty stroke path");
            return;
        }
        self.strokes.push(Stroke::new(points, self.active_tool));
        self.undone.clear();
        log::debug!(
            "Committed {} stroke ({} on page)",
            self.active_tool.label(),
            self.strokes.len()
        );
    }

    /// Committed strokes in draw order (read-only; rendering layer input).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes currently on the page.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

impl Default for NotePage {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for NotePage {
    fn set_active_tool(&mut self, tool: ToolSelection) {
        self.active_tool = tool;
    }

    fn undo(&mut self) {
        if let Some(stroke) = self.strokes.pop() {
            self.undone.push(stroke);
        }
    }

    fn redo(&mut self) {
        if let Some(stroke) = self.undone.pop() {
            self.strokes.push(stroke);
        }
    }

    fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLUE;

    #[test]
    fn commit_clears_redo_stack() {
        let mut page = NotePage::new();
        page.commit_stroke(vec![(0, 0), (10, 10)]);
        page.undo();
        assert!(page.can_redo());

        page.commit_stroke(vec![(5, 5), (15, 15)]);
        assert!(!page.can_redo());
        assert_eq!(page.stroke_count(), 1);
    }

    #[test]
    fn undo_redo_round_trip_restores_stroke() {
        let mut page = NotePage::new();
        page.set_active_tool(ToolSelection::Pen {
            color: BLUE,
            width: 4.5,
        });
        page.commit_stroke(vec![(1, 2), (3, 4)]);

        page.undo();
        assert_eq!(page.stroke_count(), 0);

        page.redo();
        assert_eq!(page.stroke_count(), 1);
        assert_eq!(
            page.strokes()[0].tool,
            ToolSelection::Pen {
                color: BLUE,
                width: 4.5
            }
        );
    }

    #[test]
    fn undo_redo_at_boundaries_are_noops() {
        let mut page = NotePage::new();
        page.undo();
        page.redo();
        assert_eq!(page.stroke_count(), 0);
        assert!(!page.can_undo());
        assert!(!page.can_redo());
    }

    #[test]
    fn empty_path_is_not_recorded() {
        let mut page = NotePage::new();
        page.commit_stroke(Vec::new());
        assert_eq!(page.stroke_count(), 0);
        assert!(!page.can_undo());
    }

    #[test]
    fn eraser_passes_are_history_entries() {
        let mut page = NotePage::new();
        page.commit_stroke(vec![(0, 0), (10, 0)]);

        page.set_active_tool(ToolSelection::Eraser);
        page.commit_stroke(vec![(5, 0), (5, 10)]);
        assert_eq!(page.stroke_count(), 2);

        // Undoing removes the erase pass, not the ink under it.
        page.undo();
        assert_eq!(page.stroke_count(), 1);
        assert!(!page.strokes()[0].tool.is_eraser());
    }
}
