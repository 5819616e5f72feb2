//! Ink primitives shared across the application.
//!
//! This module defines the core drawing types used by the note shell:
//! - [`Color`]: RGBA color representation with predefined ink constants
//! - [`ToolSelection`]: the pen/eraser tool tagged union
//! - [`Stroke`]: a committed stroke record (path + tool)

pub mod color;
pub mod stroke;
pub mod tool;

// Re-export commonly used types at module level
pub use color::Color;
pub use stroke::Stroke;
pub use tool::ToolSelection;

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, GRID_BLUE, ORANGE, PURPLE, RED};
