//! Capture module - collects pointer samples while the user draws
//!
//! This module provides:
//! - `SampleBuffer` for building a sample sequence during a drawing session
//! - `CaptureError` for drawings that cannot be transformed

mod buffer;

pub use buffer::{CaptureError, SampleBuffer};
