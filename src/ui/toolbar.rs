//! Toolbar view model.
//!
//! Presentational projection of the controller's published state: one swatch
//! per palette color, one width control per preset, eraser toggle, and
//! undo/redo buttons. The toolbar never mutates tool state itself - every
//! user gesture becomes a [`ToolbarIntent`] dispatched into the controller,
//! and button highlight/enabled flags are derived from controller state on
//! each render.

use crate::config::Config;
use crate::controller::ToolController;
use crate::draw::{Color, ToolSelection};
use crate::surface::DrawingSurface;

/// A user gesture on the toolbar, forwarded verbatim to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarIntent {
    /// Tap on the palette swatch at this index
    SelectColor(usize),
    /// Tap on the stroke width control at this index
    SelectWidth(usize),
    /// Tap on the eraser button (toggles back to the last pen)
    ToggleEraser,
    /// Tap on the undo button
    Undo,
    /// Tap on the redo button
    Redo,
}

/// Render-ready toolbar state derived from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    /// Undo button enabled (de-emphasized when false)
    pub undo_enabled: bool,
    /// Redo button enabled (de-emphasized when false)
    pub redo_enabled: bool,
    /// Eraser button highlighted
    pub eraser_active: bool,
    /// Index of the highlighted swatch, if the current pen color is in the
    /// palette
    pub active_swatch: Option<usize>,
    /// Index of the highlighted width control, if the current width is a
    /// preset
    pub active_width: Option<usize>,
}

/// Toolbar contents plus the pen memory used by the eraser toggle.
///
/// Swatches and width presets are fixed at construction from config. The
/// last pen ink is remembered here (view-level convenience) so toggling the
/// eraser off restores the pen the user had, without the controller keeping
/// any hidden tool history.
pub struct ToolbarView {
    swatches: Vec<Color>,
    widths: Vec<f64>,
    pen_color: Color,
    pen_width: f64,
}

impl ToolbarView {
    /// Builds the toolbar from the configured palette and drawing defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            swatches: config.palette.colors.iter().map(|c| c.to_color()).collect(),
            widths: config.palette.widths.clone(),
            pen_color: config.drawing.default_color.to_color(),
            pen_width: config.drawing.default_width,
        }
    }

    /// Configured swatch colors in toolbar order.
    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Configured width presets in toolbar order.
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Forwards a toolbar gesture into the controller.
    ///
    /// Out-of-range indices are ignored with a warning; they can only come
    /// from a view rendered against an older palette, which is the same
    /// stale-UI race the controller tolerates on undo/redo.
    pub fn dispatch<S: DrawingSurface>(
        &mut self,
        intent: ToolbarIntent,
        controller: &mut ToolController<S>,
    ) {
        // Keep the pen memory current before acting, in case the host
        // changed the pen through another path (e.g. a session command).
        if let ToolSelection::Pen { color, width } = controller.tool() {
            self.pen_color = color;
            self.pen_width = width;
        }

        match intent {
            ToolbarIntent::SelectColor(index) => {
                let Some(&color) = self.swatches.get(index) else {
                    log::warn!("Swatch index {index} out of range, ignoring");
                    return;
                };
                self.pen_color = color;
                controller.select_pen(color, self.pen_width);
            }
            ToolbarIntent::SelectWidth(index) => {
                let Some(&width) = self.widths.get(index) else {
                    log::warn!("Width index {index} out of range, ignoring");
                    return;
                };
                self.pen_width = width;
                controller.select_pen(self.pen_color, width);
            }
            ToolbarIntent::ToggleEraser => {
                if controller.tool().is_eraser() {
                    controller.select_pen(self.pen_color, self.pen_width);
                } else {
                    controller.select_eraser();
                }
            }
            ToolbarIntent::Undo => controller.undo(),
            ToolbarIntent::Redo => controller.redo(),
        }
    }

    /// Derives the render-ready toolbar state from the controller.
    pub fn snapshot<S: DrawingSurface>(&self, controller: &ToolController<S>) -> ToolbarState {
        let availability = controller.undo_availability();
        let (active_swatch, active_width, eraser_active) = match controller.tool() {
            ToolSelection::Pen { color, width } => (
                self.swatches.iter().position(|&c| c == color),
                self.widths.iter().position(|&w| w == width),
                false,
            ),
            ToolSelection::Eraser => (None, None, true),
        };

        ToolbarState {
            undo_enabled: availability.can_undo,
            redo_enabled: availability.can_redo,
            eraser_active,
            active_swatch,
            active_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::NotePage;

    fn setup() -> (ToolbarView, ToolController<NotePage>) {
        let config = Config::default();
        let toolbar = ToolbarView::from_config(&config);
        let controller = ToolController::new(
            NotePage::new(),
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
        );
        (toolbar, controller)
    }

    #[test]
    fn default_pen_highlights_its_swatch_and_width() {
        let (toolbar, controller) = setup();
        let state = toolbar.snapshot(&controller);

        assert_eq!(state.active_swatch, Some(0)); // black
        assert_eq!(state.active_width, Some(1)); // 3.0
        assert!(!state.eraser_active);
        assert!(!state.undo_enabled);
        assert!(!state.redo_enabled);
    }

    #[test]
    fn select_color_keeps_current_width() {
        let (mut toolbar, mut controller) = setup();

        toolbar.dispatch(ToolbarIntent::SelectWidth(3), &mut controller);
        toolbar.dispatch(ToolbarIntent::SelectColor(1), &mut controller);

        assert_eq!(
            controller.tool(),
            ToolSelection::Pen {
                color: toolbar.swatches()[1],
                width: toolbar.widths()[3],
            }
        );
    }

    #[test]
    fn eraser_toggle_restores_previous_pen() {
        let (mut toolbar, mut controller) = setup();
        toolbar.dispatch(ToolbarIntent::SelectColor(2), &mut controller);
        let pen = controller.tool();

        toolbar.dispatch(ToolbarIntent::ToggleEraser, &mut controller);
        assert!(toolbar.snapshot(&controller).eraser_active);

        toolbar.dispatch(ToolbarIntent::ToggleEraser, &mut controller);
        assert_eq!(controller.tool(), pen);
    }

    #[test]
    fn eraser_restore_tracks_pen_set_outside_the_toolbar() {
        let (mut toolbar, mut controller) = setup();
        controller.select_pen(toolbar.swatches()[4], 7.0);

        toolbar.dispatch(ToolbarIntent::ToggleEraser, &mut controller);
        toolbar.dispatch(ToolbarIntent::ToggleEraser, &mut controller);

        assert_eq!(
            controller.tool(),
            ToolSelection::Pen {
                color: toolbar.swatches()[4],
                width: 7.0,
            }
        );
    }

    #[test]
    fn out_of_palette_width_highlights_no_preset() {
        let (toolbar, mut controller) = setup();
        controller.select_pen(toolbar.swatches()[0], 7.3);

        let state = toolbar.snapshot(&controller);
        assert_eq!(state.active_swatch, Some(0));
        assert_eq!(state.active_width, None);
    }

    #[test]
    fn stale_indices_are_ignored() {
        let (mut toolbar, mut controller) = setup();
        let before = controller.tool();

        toolbar.dispatch(ToolbarIntent::SelectColor(99), &mut controller);
        toolbar.dispatch(ToolbarIntent::SelectWidth(99), &mut controller);

        assert_eq!(controller.tool(), before);
    }

    #[test]
    fn undo_redo_intents_reach_the_controller() {
        let (mut toolbar, mut controller) = setup();
        controller.surface_mut().commit_stroke(vec![(0, 0), (1, 1)]);
        controller.on_drawing_changed();
        assert!(toolbar.snapshot(&controller).undo_enabled);

        toolbar.dispatch(ToolbarIntent::Undo, &mut controller);
        let state = toolbar.snapshot(&controller);
        assert!(!state.undo_enabled);
        assert!(state.redo_enabled);

        toolbar.dispatch(ToolbarIntent::Redo, &mut controller);
        assert!(toolbar.snapshot(&controller).undo_enabled);
    }
}
