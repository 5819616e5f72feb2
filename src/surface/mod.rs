//! Drawing surface boundary.
//!
//! The drawing surface owns stroke capture, rendering, and the linear
//! undo/redo history. The rest of the application drives it through the
//! narrow [`DrawingSurface`] command interface and never inspects its
//! stroke-level internals.

pub mod page;

pub use page::NotePage;

use crate::draw::ToolSelection;

/// Command interface to the canvas component that records strokes and owns
/// the undo/redo history.
///
/// Contract:
/// - `set_active_tool` is idempotent and always succeeds; it affects
///   subsequent strokes only, never strokes already on the page.
/// - `undo`/`redo` are no-ops when there is no history/future to move to.
/// - `can_undo`/`can_redo` are pure queries of the current history position.
/// - The surface signals "something changed - re-query" after any stroke
///   history mutation. Delivery is host glue: whoever feeds input into the
///   surface calls [`ToolController::on_drawing_changed`] afterwards.
///
/// [`ToolController::on_drawing_changed`]: crate::controller::ToolController::on_drawing_changed
pub trait DrawingSurface {
    /// Configures the tool used for subsequent strokes.
    fn set_active_tool(&mut self, tool: ToolSelection);

    /// Steps the history back one stroke mutation. No-op at the start.
    fn undo(&mut self);

    /// Re-applies the most recently undone mutation. No-op at the end.
    fn redo(&mut self);

    /// Whether a history step exists behind the current position.
    fn can_undo(&self) -> bool;

    /// Whether a history step exists ahead of the current position.
    fn can_redo(&self) -> bool;
}
