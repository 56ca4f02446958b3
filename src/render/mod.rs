//! Render module - drawing of samples, epicycles and the traced curve
//!
//! This module provides:
//! - `Canvas` trait for the abstract 2D drawing context
//! - Epicycle chain and trace rendering
//! - egui-backed canvas for the application window

mod canvas;
mod epicycles;
mod painter;

pub use canvas::{Canvas, Palette};
#[cfg(test)]
pub use canvas::{DrawCommand, RecordingCanvas};
pub use epicycles::{draw_samples, draw_trace, render_frame};
pub use painter::{DisplaySettings, PainterCanvas};
