//! Fourier module - turns a sampled curve into rotating components
//!
//! This module provides:
//! - `Point` for 2D offsets from the drawing origin
//! - `Component` / `ComponentSet` for the weighted rotating vectors
//! - `transform` - the naive truncated DFT

mod dft;
mod point;

pub use dft::{transform, Component, ComponentSet};
pub use point::Point;
