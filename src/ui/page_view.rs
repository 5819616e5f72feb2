//! Page view model: grid-paper background metrics and vertical scrolling.
//!
//! The page composes a static grid background behind the drawing surface.
//! Horizontal bounds are fixed (no horizontal scroll, no zoom); the content
//! grows downward as ink lands near the bottom and the viewport scrolls
//! vertically over it.

use crate::config::PageConfig;
use crate::draw::{Color, Stroke};

/// Presentational page state: grid metrics, content height, scroll offset.
pub struct PageView {
    page_width: f64,
    grid_spacing: f64,
    grid_color: Color,
    viewport_height: f64,
    content_height: f64,
    scroll_offset: f64,
}

impl PageView {
    /// Creates a page view for a viewport of the given height.
    pub fn new(config: &PageConfig, viewport_height: f64) -> Self {
        Self {
            page_width: config.page_width,
            grid_spacing: config.grid_spacing,
            grid_color: config.grid_color.to_color(),
            viewport_height,
            content_height: viewport_height,
            scroll_offset: 0.0,
        }
    }

    /// Fixed page width in pixels.
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Grid rule color.
    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    /// Current vertical scroll offset in page coordinates.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Current scrollable content height.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Scrolls the viewport by `dy` pixels, clamped to the content bounds.
    pub fn scroll_by(&mut self, dy: f64) {
        let max_scroll = (self.content_height - self.viewport_height).max(0.0);
        self.scroll_offset = (self.scroll_offset + dy).clamp(0.0, max_scroll);
    }

    /// Grows the content height so all committed strokes fit, with one grid
    /// cell of breathing room below the lowest ink. Content never shrinks:
    /// undoing a stroke near the bottom must not yank the scroll position.
    pub fn sync_content_height(&mut self, strokes: &[Stroke]) {
        let lowest_ink = strokes
            .iter()
            .filter_map(Stroke::max_y)
            .max()
            .unwrap_or(0) as f64;
        let needed = lowest_ink + self.grid_spacing;
        if needed > self.content_height {
            self.content_height = needed;
        }
    }

    /// Viewport-local y positions of the horizontal grid rules currently
    /// visible.
    pub fn horizontal_rules(&self) -> Vec<f64> {
        let mut rules = Vec::new();
        // First rule at or below the top edge of the viewport.
        let mut y = (self.scroll_offset / self.grid_spacing).ceil() * self.grid_spacing;
        while y <= self.scroll_offset + self.viewport_height {
            rules.push(y - self.scroll_offset);
            y += self.grid_spacing;
        }
        rules
    }

    /// X positions of the vertical grid rules. These never change: the page
    /// has fixed horizontal bounds.
    pub fn vertical_rules(&self) -> Vec<f64> {
        let mut rules = Vec::new();
        let mut x = 0.0;
        while x <= self.page_width {
            rules.push(x);
            x += self.grid_spacing;
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ToolSelection};

    fn test_page() -> PageView {
        PageView::new(&PageConfig::default(), 600.0)
    }

    fn stroke_reaching(y: i32) -> Stroke {
        Stroke::new(
            vec![(10, 0), (10, y)],
            ToolSelection::Pen {
                color: BLACK,
                width: 3.0,
            },
        )
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut page = test_page();

        // Nothing below the fold yet: scrolling goes nowhere.
        page.scroll_by(100.0);
        assert_eq!(page.scroll_offset(), 0.0);

        page.sync_content_height(&[stroke_reaching(1000)]);
        page.scroll_by(10_000.0);
        assert_eq!(page.scroll_offset(), page.content_height() - 600.0);

        page.scroll_by(-10_000.0);
        assert_eq!(page.scroll_offset(), 0.0);
    }

    #[test]
    fn content_grows_but_never_shrinks() {
        let mut page = test_page();
        page.sync_content_height(&[stroke_reaching(1000)]);
        let grown = page.content_height();
        assert!(grown > 600.0);

        // Strokes gone (e.g. undone): height stays.
        page.sync_content_height(&[]);
        assert_eq!(page.content_height(), grown);
    }

    #[test]
    fn horizontal_rules_follow_the_scroll_offset() {
        let mut page = test_page();
        page.sync_content_height(&[stroke_reaching(2000)]);
        page.scroll_by(30.0);

        let rules = page.horizontal_rules();
        // spacing 24, offset 30: first visible page rule is y=48 -> local 18
        assert_eq!(rules[0], 18.0);
        for pair in rules.windows(2) {
            assert_eq!(pair[1] - pair[0], 24.0);
        }
    }

    #[test]
    fn vertical_rules_span_the_fixed_width() {
        let page = test_page();
        let rules = page.vertical_rules();
        assert_eq!(rules[0], 0.0);
        assert!(*rules.last().unwrap() <= page.page_width());
        // 800 / 24 = 33 full cells plus the x=0 rule
        assert_eq!(rules.len(), 34);
    }
}
