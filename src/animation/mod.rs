//! Animation module - time-driven epicycle playback
//!
//! This module provides:
//! - `TracePath` for the reconstructed curve accumulated across frames
//! - `AnimationDriver`, the IDLE/RUNNING state machine advancing the phase

mod driver;
mod trace;

#[allow(unused_imports)]
pub use driver::{AnimationConfig, AnimationDriver, AnimationState, Epoch, Tick, MIN_DURATION_SECS};
pub use trace::TracePath;
