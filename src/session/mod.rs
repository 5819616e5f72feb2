//! Interactive note session.
//!
//! A line-command shell standing in for the platform note view: it owns the
//! controller (which owns the page surface), the toolbar view model, and the
//! page view model, and drives them from simple text commands. Used for the
//! `--interactive` and `--script` modes.

pub mod command;

#[cfg(test)]
mod tests;

pub use command::{Command, CommandError};

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::controller::ToolController;
use crate::draw::ToolSelection;
use crate::surface::NotePage;
use crate::ui::{PageView, ToolbarIntent, ToolbarView};
use crate::util;

/// Headless viewport height used by the shell's page view.
const VIEWPORT_HEIGHT: f64 = 600.0;

/// Owns the controller and views for one note-editing session.
pub struct Session {
    controller: ToolController<NotePage>,
    toolbar: ToolbarView,
    page: PageView,
    default_width: f64,
}

impl Session {
    /// Creates a session with a fresh page and the configured defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            controller: ToolController::new(
                NotePage::new(),
                config.drawing.default_color.to_color(),
                config.drawing.default_width,
            ),
            toolbar: ToolbarView::from_config(config),
            page: PageView::new(&config.page, VIEWPORT_HEIGHT),
            default_width: config.drawing.default_width,
        }
    }

    /// Reads commands from `input` until `quit` or EOF, writing responses to
    /// `output`.
    ///
    /// Command errors are reported on their own line and never end the
    /// session.
    ///
    /// # Errors
    /// Returns an error only for I/O failures on `input` or `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match command::parse(&line) {
                Err(err) => writeln!(output, "error: {err}")?,
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(cmd)) => self.apply(cmd, output)?,
            }
        }
        Ok(())
    }

    /// Applies one parsed command and writes its response.
    fn apply<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<()> {
        match cmd {
            Command::Pen { color, width } => {
                // Direct pen selection: out-of-palette inks and widths are
                // legitimate here, the controller accepts any positive width.
                let width = width.unwrap_or_else(|| self.current_pen_width());
                self.controller.select_pen(color, width);
                self.write_status(output)?;
            }
            Command::Eraser => {
                self.toolbar
                    .dispatch(ToolbarIntent::ToggleEraser, &mut self.controller);
                self.write_status(output)?;
            }
            Command::Swatch(index) => {
                if index >= self.toolbar.swatches().len() {
                    writeln!(
                        output,
                        "error: swatch {} out of range ({} swatches)",
                        index + 1,
                        self.toolbar.swatches().len()
                    )?;
                } else {
                    self.toolbar
                        .dispatch(ToolbarIntent::SelectColor(index), &mut self.controller);
                    self.write_status(output)?;
                }
            }
            Command::Width(index) => {
                if index >= self.toolbar.widths().len() {
                    writeln!(
                        output,
                        "error: width {} out of range ({} presets)",
                        index + 1,
                        self.toolbar.widths().len()
                    )?;
                } else {
                    self.toolbar
                        .dispatch(ToolbarIntent::SelectWidth(index), &mut self.controller);
                    self.write_status(output)?;
                }
            }
            Command::Stroke(points) => {
                // Host input path: the stroke goes straight to the surface,
                // followed by the drawing-changed notification.
                self.controller.surface_mut().commit_stroke(points);
                self.controller.on_drawing_changed();
                self.page
                    .sync_content_height(self.controller.surface().strokes());
                self.write_status(output)?;
            }
            Command::Scroll(dy) => {
                self.page.scroll_by(dy);
                writeln!(
                    output,
                    "scroll={:.0} height={:.0}",
                    self.page.scroll_offset(),
                    self.page.content_height()
                )?;
            }
            Command::Undo => {
                self.toolbar
                    .dispatch(ToolbarIntent::Undo, &mut self.controller);
                self.write_status(output)?;
            }
            Command::Redo => {
                self.toolbar
                    .dispatch(ToolbarIntent::Redo, &mut self.controller);
                self.write_status(output)?;
            }
            Command::State => self.write_status(output)?,
            Command::Help => write_help(output)?,
            Command::Quit => unreachable!("quit is handled by the run loop"),
        }
        Ok(())
    }

    /// Width to keep when `pen` is given without one: the current pen width,
    /// or the configured default while the eraser is active.
    fn current_pen_width(&self) -> f64 {
        match self.controller.tool() {
            ToolSelection::Pen { width, .. } => width,
            ToolSelection::Eraser => self.default_width,
        }
    }

    /// Writes the status line, e.g.
    /// `[blue] [4.5px] [pen] strokes=1 undo=yes redo=no`.
    fn write_status<W: Write>(&self, output: &mut W) -> Result<()> {
        let availability = self.controller.undo_availability();
        let history = format!(
            "strokes={} undo={} redo={}",
            self.controller.surface().stroke_count(),
            yes_no(availability.can_undo),
            yes_no(availability.can_redo),
        );
        match self.controller.tool() {
            ToolSelection::Pen { color, width } => writeln!(
                output,
                "[{}] [{width:.1}px] [pen] {history}",
                util::color_to_name(&color)
            )?,
            ToolSelection::Eraser => writeln!(output, "[eraser] {history}")?,
        }
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn write_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  pen <color> [width]   select a pen (named color or r,g,b)")?;
    writeln!(output, "  eraser                toggle the eraser")?;
    writeln!(output, "  swatch <n>            tap the nth palette swatch")?;
    writeln!(output, "  width <n>             tap the nth width preset")?;
    writeln!(output, "  stroke x,y x,y ...    draw a stroke with the active tool")?;
    writeln!(output, "  scroll <dy>           scroll the page vertically")?;
    writeln!(output, "  undo / redo           step the stroke history")?;
    writeln!(output, "  state                 print the status line")?;
    writeln!(output, "  quit                  end the session")?;
    Ok(())
}
