//! Library exports for reusing gridnote subsystems.
//!
//! Exposes the tool state controller and the drawing surface contract
//! alongside the configuration data structures, so that external tools
//! (e.g. alternative frontends) can share the state model with the main
//! binary.

pub mod config;
pub mod controller;
pub mod draw;
pub mod session;
pub mod surface;
pub mod ui;
pub mod util;

pub use config::Config;
pub use controller::{ToolController, UndoAvailability};
pub use surface::DrawingSurface;
