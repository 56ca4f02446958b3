//! Drawing session controller
//!
//! `DrawingSession` owns everything one window needs between frames: the
//! captured samples, the animation, the surface size and the precision.
//! The host feeds it pointer events and calls `frame()` once per refresh.

use std::f64::consts::TAU;

use crate::animation::{AnimationConfig, AnimationDriver, Epoch, Tick, MIN_DURATION_SECS};
use crate::capture::{CaptureError, SampleBuffer};
use crate::fourier::{ComponentSet, Point};
use crate::render::{draw_samples, Canvas, Palette};

/// Default number of epicycles
pub const DEFAULT_PRECISION: usize = 10;

/// Precision accepted from the UI
pub const PRECISION_RANGE: std::ops::RangeInclusive<usize> = 1..=200;

/// Animation cycle lengths accepted from the UI, in seconds
pub const DURATION_RANGE: std::ops::RangeInclusive<f64> = MIN_DURATION_SECS..=30.0;

/// Pixel size of the drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the surface; samples are stored relative to it
    pub fn origin(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// What the session is currently doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Drawing { samples: usize },
    Animating {
        epicycles: usize,
        /// Completed revolutions plus one
        cycle: u64,
        /// Progress through the current revolution
        percent: u8,
    },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Idle => write!(f, "Idle - draw a closed curve"),
            Status::Drawing { samples } => write!(f, "Drawing: {} points", samples),
            Status::Animating {
                epicycles,
                cycle,
                percent,
            } => write!(
                f,
                "Animating: {} epicycles, cycle {} ({}%)",
                epicycles, cycle, percent
            ),
        }
    }
}

pub struct DrawingSession {
    buffer: SampleBuffer,
    driver: AnimationDriver,
    surface: Surface,
    precision: usize,
    /// Epoch of the animation the host keeps ticking
    pending: Option<Epoch>,
    /// Revolution counter and phase of the last drawn tick
    cycle: u64,
    phase: f64,
    pub palette: Palette,
    /// Keep drawing the captured samples beneath the epicycles
    pub show_samples_while_animating: bool,
}

impl DrawingSession {
    pub fn new(surface: Surface, precision: usize, config: AnimationConfig) -> Self {
        let mut session = Self {
            buffer: SampleBuffer::new(),
            driver: AnimationDriver::new(config),
            surface,
            precision: DEFAULT_PRECISION,
            pending: None,
            cycle: 0,
            phase: 0.0,
            palette: Palette::default(),
            show_samples_while_animating: false,
        };
        session.precision_changed(precision as i64);
        session
    }

    /// Begin a new drawing, abandoning any running animation
    pub fn pointer_down(&mut self) {
        self.driver.cancel();
        self.pending = None;
        self.buffer.begin();
    }

    /// Record the pointer position if a drawing is in progress
    ///
    /// # Arguments
    /// * `position` - Pointer position in surface coordinates
    ///
    /// # Returns
    /// `true` if a sample was recorded
    pub fn pointer_move(&mut self, position: Point) -> bool {
        self.buffer.push(position - self.surface.origin())
    }

    /// Finish the drawing and start animating it
    ///
    /// Drawings with fewer than two points are dropped silently.
    ///
    /// # Returns
    /// `true` if an animation started
    pub fn pointer_up(&mut self, now: f64) -> bool {
        match self.buffer.freeze() {
            Ok(samples) => {
                let epoch = self.driver.start(samples, self.precision, now);
                self.pending = Some(epoch);
                self.cycle = 1;
                self.phase = 0.0;
                true
            }
            Err(CaptureError::NotCapturing) => false,
            Err(e) => {
                log::debug!("Not animating: {}", e);
                false
            }
        }
    }

    /// Set the precision for the next transform
    ///
    /// Out-of-range values are clamped; a running animation is unaffected.
    ///
    /// # Returns
    /// The precision actually stored
    pub fn precision_changed(&mut self, value: i64) -> usize {
        let min = *PRECISION_RANGE.start() as i64;
        let max = *PRECISION_RANGE.end() as i64;
        self.precision = value.clamp(min, max) as usize;
        self.precision
    }

    /// Set the cycle duration for the next animation
    pub fn duration_changed(&mut self, secs: f64) -> f64 {
        let secs = secs.clamp(*DURATION_RANGE.start(), *DURATION_RANGE.end());
        self.driver.config.duration_secs = secs;
        secs
    }

    /// Track the drawing surface size
    ///
    /// Captured samples and the trace are kept as they are.
    pub fn viewport_resized(&mut self, width: f64, height: f64) {
        let surface = Surface::new(width, height);
        if surface != self.surface {
            log::debug!("Surface resized to {}x{}", width, height);
            self.surface = surface;
        }
    }

    /// Stop everything and forget the drawing
    pub fn clear(&mut self) {
        self.driver.cancel();
        self.pending = None;
        self.buffer.clear();
    }

    /// Draw one display refresh
    ///
    /// Ticks the animation if one is scheduled, otherwise shows the
    /// captured samples.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C, now: f64) {
        let origin = self.surface.origin();

        if let Some(epoch) = self.pending {
            let underlay: &[Point] = if self.show_samples_while_animating {
                self.buffer.samples()
            } else {
                &[]
            };
            match self
                .driver
                .tick(epoch, now, canvas, &self.palette, origin, underlay)
            {
                Tick::Drawn { phase, restarted } => {
                    if restarted {
                        self.cycle += 1;
                    }
                    self.phase = phase;
                }
                Tick::Stale => self.pending = None,
            }
            return;
        }

        draw_samples(canvas, &self.palette, origin, self.buffer.samples());
    }

    /// Whether the host must keep refreshing without input
    pub fn needs_repaint(&self) -> bool {
        self.pending.is_some() || self.buffer.is_capturing()
    }

    pub fn status(&self) -> Status {
        if self.buffer.is_capturing() {
            Status::Drawing {
                samples: self.buffer.len(),
            }
        } else if self.pending.is_some() {
            Status::Animating {
                epicycles: self.driver.components().len(),
                cycle: self.cycle,
                percent: (self.phase / TAU * 100.0) as u8,
            }
        } else {
            Status::Idle
        }
    }

    /// Components of the running animation (empty when idle)
    pub fn components(&self) -> &ComponentSet {
        self.driver.components()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn duration(&self) -> f64 {
        self.driver.config.duration_secs
    }

    #[cfg(test)]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[cfg(test)]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    #[cfg(test)]
    pub fn samples(&self) -> &[Point] {
        self.buffer.samples()
    }
}
