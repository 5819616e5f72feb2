//! Tool state controller.
//!
//! Single authority for "what tool is active" and "which undo/redo actions
//! are currently valid." Every tool change from the UI flows through here to
//! the drawing surface, and undo/redo availability is re-queried from the
//! surface after every mutation source - tool changes, undo/redo calls, and
//! drawing-changed notifications - so the toolbar never shows stale
//! affordances.


use crate::draw::{Color, ToolSelection};
use crate::surface::DrawingSurface;

/// Published undo/redo affordances.
///
/// A derived, read-only projection of the drawing surface's history position.
/// The controller never computes these locally; it always re-queries the
/// surface, which is the sole component with stroke-level visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UndoAvailability {
    /// Whether an undo step is currently available
    pub can_undo: bool,
    /// Whether a redo step is currently available
    pub can_redo: bool,
}

/// Mediates tool commands to the drawing surface and publishes canonical
/// tool state to the view layer.
///
/// The controller owns the surface exclusively for its lifetime; views only
/// read the published [`ToolSelection`] and [`UndoAvailability`] (one-way
/// data flow). Construction takes the surface by value, so "surface absent"
/// is unrepresentable rather than a runtime error.
pub struct ToolController<S: DrawingSurface> {
    surface: S,
    tool: ToolSelection,
    undo_availability: UndoAvailability,
}

impl<S: DrawingSurface> ToolController<S> {
    /// Creates a controller that owns `surface`, with a default pen of the
    /// given color and width.
    ///
    /// The default tool is pushed to the surface immediately so the surface
    /// and the published state never disagree, and availability is seeded
    /// from the surface's current history (which may be non-empty if the
    /// platform restored a page).
    pub fn new(surface: S, default_color: Color, default_width: f64) -> Self {
        let mut controller = Self {
            surface,
            tool: ToolSelection::Pen {
                color: default_color,
                width: default_width,
            },
            undo_availability: UndoAvailability::default(),
        };
        controller.surface.set_active_tool(controller.tool);
        controller.refresh_undo_availability();
        controller
    }

    /// Currently selected tool.
    pub fn tool(&self) -> ToolSelection {
        self.tool
    }

    /// Current undo/redo affordances.
    pub fn undo_availability(&self) -> UndoAvailability {
        self.undo_availability
    }

    /// Read access to the owned surface for the rendering layer.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the host input path.
    ///
    /// The platform backend delivers captured stroke input directly to the
    /// surface and must call [`on_drawing_changed`] afterwards. Views must
    /// not use this; tool and history commands go through the controller.
    ///
    /// [`on_drawing_changed`]: Self::on_drawing_changed
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Selects a pen with the given ink color and stroke width.
    ///
    /// Accepts any positive width - out-of-palette widths are forwarded to
    /// the surface, which clamps or applies them as it sees fit. Width is
    /// pre-constrained by the UI layer, so a non-positive value is a
    /// programming error, not a runtime condition.
    pub fn select_pen(&mut self, color: Color, width: f64) {
        debug_assert!(width > 0.0, "stroke width must be positive");
        self.tool = ToolSelection::Pen { color, width };
        self.surface.set_active_tool(self.tool);
        // Tool changes don't alter history, but refresh anyway so published
        // state stays consistent with the surface after every command.
        self.refresh_undo_availability();
        log::debug!("Selected pen (width {width:.1})");
    }

    /// Selects the eraser.
    pub fn select_eraser(&mut self) {
        self.tool = ToolSelection::Eraser;
        self.surface.set_active_tool(self.tool);
        self.refresh_undo_availability();
        log::debug!("Selected eraser");
    }

    /// Steps the surface history back one mutation.
    ///
    /// Silently ignored when undo is unavailable: the UI disables the
    /// control, but rapid input can race a stale enabled state, and that is
    /// expected rather than a fault.
    pub fn undo(&mut self) {
        if !self.undo_availability.can_undo {
            log::debug!("Undo ignored: history empty");
            return;
        }
        self.surface.undo();
        self.refresh_undo_availability();
    }

    /// Re-applies the most recently undone mutation. No-op when unavailable,
    /// symmetric to [`undo`](Self::undo).
    pub fn redo(&mut self) {
        if !self.undo_availability.can_redo {
            log::debug!("Redo ignored: nothing to redo");
            return;
        }
        self.surface.redo();
        self.refresh_undo_availability();
    }

    /// Handles the surface's "stroke history changed" notification.
    ///
    /// A new stroke clears the redo future by convention; this must show up
    /// in the toolbar promptly, so the host calls this after every surface
    /// mutation it delivers.
    pub fn on_drawing_changed(&mut self) {
        self.refresh_undo_availability();
    }

    /// Re-queries `can_undo`/`can_redo` from the surface and publishes them.
    pub fn refresh_undo_availability(&mut self) {
        let refreshed = UndoAvailability {
            can_undo: self.surface.can_undo(),
            can_redo: self.surface.can_redo(),
        };
        if refreshed != self.undo_availability {
            log::debug!(
                "Undo availability: undo={} redo={}",
                refreshed.can_undo,
                refreshed.can_redo
            );
        }
        self.undo_availability = refreshed;
    }
}
