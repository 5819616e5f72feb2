//! View models: toolbar and page.
//!
//! Both are strictly presentational. Intents flow view -> controller;
//! published state flows controller -> view. Neither view ever mutates the
//! tool selection or undo availability directly.

pub mod page_view;
pub mod toolbar;

// Re-export commonly used types at module level
pub use page_view::PageView;
pub use toolbar::{ToolbarIntent, ToolbarState, ToolbarView};
