//! Animation driver - maps wall-clock time to epicycle phase
//!
//! ## State machine
//!
//! ```text
//!            start()                 tick() (loops forever)
//!   IDLE ─────────────▶ RUNNING ◀──────────────┐
//!     ▲                    │ └─────────────────┘
//!     └──── cancel() ──────┘
//! ```
//!
//! ## Cancellation
//!
//! The host schedules ticks itself (one per display refresh). Every
//! `start()` and `cancel()` bumps an epoch counter; a tick carrying an
//! older epoch is stale and does nothing. A tick scheduled before the
//! user started a new drawing can therefore never touch the new session.
//!
//! ## Phase
//!
//! `phase = elapsed / duration * 2*pi`, with `elapsed` measured from the
//! start of the current cycle. Once `elapsed` reaches the duration the
//! cycle restarts *before* the frame is drawn, so the phase handed to the
//! renderer always lies in [0, 2*pi).

use std::f64::consts::TAU;

use crate::fourier::{transform, ComponentSet, Point};
use crate::render::{draw_trace, render_frame, Canvas, Palette};

use super::trace::TracePath;

/// Shortest cycle the driver will run, in seconds
pub const MIN_DURATION_SECS: f64 = 0.5;

/// Animation configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Wall-clock length of one full revolution, in seconds
    ///
    /// Values below `MIN_DURATION_SECS` (or NaN) run at the minimum.
    pub duration_secs: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_secs: 3.0 }
    }
}

impl AnimationConfig {
    fn effective_duration(&self) -> f64 {
        // f64::max ignores a NaN operand
        self.duration_secs.max(MIN_DURATION_SECS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
}

/// Generation of an animation, captured when it is started
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Epoch(u64);

/// Result of a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// A frame was drawn; keep scheduling ticks
    Drawn {
        phase: f64,
        /// This tick began a new cycle (trace was cleared)
        restarted: bool,
    },
    /// The tick belongs to a cancelled or replaced animation
    Stale,
}

/// Drives the epicycle animation
///
/// Owns the component set, the trace and the phase for the lifetime of one
/// animation. All of it is discarded by `cancel()`.
pub struct AnimationDriver {
    /// Configuration applied to the next `start()`
    pub config: AnimationConfig,

    state: AnimationState,
    epoch: u64,
    components: ComponentSet,
    trace: TracePath,
    phase: f64,
    cycle_start: f64,
    /// Duration captured at `start()`
    duration: f64,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig) -> Self {
        let duration = config.effective_duration();
        Self {
            config,
            state: AnimationState::Idle,
            epoch: 0,
            components: ComponentSet::default(),
            trace: TracePath::new(),
            phase: 0.0,
            cycle_start: 0.0,
            duration,
        }
    }

    /// Transform `points` and begin animating them
    ///
    /// # Arguments
    /// * `points` - Frozen samples, at least two
    /// * `precision` - Number of components to keep
    /// * `now` - Current time in seconds
    ///
    /// # Returns
    /// The epoch ticks for this animation must carry
    pub fn start(&mut self, points: &[Point], precision: usize, now: f64) -> Epoch {
        self.epoch += 1;
        self.components = transform(points, precision);
        self.trace.reset();
        self.phase = 0.0;
        self.cycle_start = now;
        self.duration = self.config.effective_duration();
        self.state = AnimationState::Running;

        log::info!(
            "Animation started: {} samples, {} epicycles, {:.1}s per cycle",
            points.len(),
            self.components.len(),
            self.duration
        );

        Epoch(self.epoch)
    }

    /// Stop the animation and discard its data
    ///
    /// Any tick still scheduled with the previous epoch becomes stale.
    pub fn cancel(&mut self) {
        if self.state == AnimationState::Running {
            log::debug!("Animation cancelled");
        }
        self.epoch += 1;
        self.state = AnimationState::Idle;
        self.components = ComponentSet::default();
        self.trace.reset();
        self.phase = 0.0;
    }

    /// Advance to `now` and draw one frame
    ///
    /// Draws `underlay` (sample offsets, may be empty) and the epicycle
    /// chain, appends the traced point and draws the trace over the chain.
    pub fn tick<C: Canvas + ?Sized>(
        &mut self,
        epoch: Epoch,
        now: f64,
        canvas: &mut C,
        palette: &Palette,
        origin: Point,
        underlay: &[Point],
    ) -> Tick {
        if self.state != AnimationState::Running || epoch != Epoch(self.epoch) {
            log::debug!("Ignoring stale tick (epoch {:?}, current {})", epoch, self.epoch);
            return Tick::Stale;
        }

        let mut elapsed = (now - self.cycle_start).max(0.0);
        let restarted = elapsed >= self.duration;
        if restarted {
            self.cycle_start = now;
            self.trace.reset();
            elapsed = 0.0;
            log::debug!("Animation cycle restarted");
        }
        self.phase = elapsed / self.duration * TAU;

        let point = render_frame(canvas, palette, origin, &self.components, self.phase, underlay);
        self.trace.push(point);
        draw_trace(canvas, palette, &self.trace);

        Tick::Drawn {
            phase: self.phase,
            restarted,
        }
    }

    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    #[cfg(test)]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    #[cfg(test)]
    pub fn trace(&self) -> &TracePath {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingCanvas;
    use assert_approx_eq::assert_approx_eq;

    fn diamond() -> Vec<Point> {
        vec![
            Point::new(0.0, -40.0),
            Point::new(40.0, 0.0),
            Point::new(0.0, 40.0),
            Point::new(-40.0, 0.0),
        ]
    }

    fn tick_at(driver: &mut AnimationDriver, epoch: Epoch, now: f64) -> Tick {
        let mut canvas = RecordingCanvas::new();
        driver.tick(epoch, now, &mut canvas, &Palette::default(), Point::new(100.0, 100.0), &[])
    }

    fn phase_of(tick: Tick) -> f64 {
        match tick {
            Tick::Drawn { phase, .. } => phase,
            Tick::Stale => panic!("unexpected stale tick"),
        }
    }

    #[test]
    fn test_starts_idle() {
        let driver = AnimationDriver::default();
        assert_eq!(driver.state(), AnimationState::Idle);
        assert!(driver.components().is_empty());
    }

    #[test]
    fn test_start_runs_transform() {
        let mut driver = AnimationDriver::default();
        driver.start(&diamond(), 7, 0.0);
        assert!(driver.is_running());
        assert_eq!(driver.components().len(), 7);
        assert!(driver.trace().is_empty());
    }

    #[test]
    fn test_phase_sweeps_then_wraps() {
        let mut driver = AnimationDriver::default(); // 3 s cycle
        let epoch = driver.start(&diamond(), 4, 10.0);

        let times = [10.0, 10.75, 11.5, 12.25, 12.99];
        let phases: Vec<f64> = times
            .iter()
            .map(|&t| phase_of(tick_at(&mut driver, epoch, t)))
            .collect();

        assert_approx_eq!(phases[0], 0.0);
        assert_approx_eq!(phases[1], TAU / 4.0);
        assert_approx_eq!(phases[2], TAU / 2.0);
        assert!(phases.windows(2).all(|w| w[0] < w[1]));
        assert!(phases[4] < TAU);
        assert_eq!(driver.trace().len(), times.len());

        // Duration elapsed: new cycle with a fresh trace
        let tick = tick_at(&mut driver, epoch, 13.0);
        assert!(matches!(tick, Tick::Drawn { restarted: true, .. }));
        assert_approx_eq!(phase_of(tick), 0.0);
        assert_eq!(driver.trace().len(), 1);

        // And again, indefinitely
        assert_approx_eq!(phase_of(tick_at(&mut driver, epoch, 14.5)), TAU / 2.0);
        let tick = tick_at(&mut driver, epoch, 16.2);
        assert!(matches!(tick, Tick::Drawn { restarted: true, .. }));
        assert_eq!(driver.trace().len(), 1);
    }

    #[test]
    fn test_traced_point_follows_components() {
        let mut driver = AnimationDriver::default();
        let epoch = driver.start(&diamond(), 4, 0.0);
        let origin = Point::new(100.0, 100.0);

        tick_at(&mut driver, epoch, 0.75);
        let point = driver.trace().points()[0];
        let expected = origin + driver.components().evaluate(TAU / 4.0);
        assert_approx_eq!(point.x, expected.x, 1e-9);
        assert_approx_eq!(point.y, expected.y, 1e-9);
        assert_eq!(driver.trace().len(), 1);
    }

    #[test]
    fn test_cancel_makes_ticks_stale() {
        let mut driver = AnimationDriver::default();
        let epoch = driver.start(&diamond(), 4, 0.0);
        tick_at(&mut driver, epoch, 0.1);

        driver.cancel();
        assert_eq!(driver.state(), AnimationState::Idle);
        assert!(driver.trace().is_empty());
        assert_eq!(tick_at(&mut driver, epoch, 0.2), Tick::Stale);
    }

    #[test]
    fn test_restart_invalidates_previous_epoch() {
        let mut driver = AnimationDriver::default();
        let first = driver.start(&diamond(), 4, 0.0);
        let second = driver.start(&diamond(), 2, 1.0);

        assert_ne!(first, second);
        assert_eq!(tick_at(&mut driver, first, 1.1), Tick::Stale);
        assert!(matches!(tick_at(&mut driver, second, 1.1), Tick::Drawn { .. }));
    }

    #[test]
    fn test_duration_applies_on_next_start() {
        let mut driver = AnimationDriver::default();
        let epoch = driver.start(&diamond(), 4, 0.0);
        driver.config.duration_secs = 1.0;

        // Still on the 3 s cycle
        assert_approx_eq!(phase_of(tick_at(&mut driver, epoch, 1.5)), TAU / 2.0);

        let epoch = driver.start(&diamond(), 4, 5.0);
        assert_approx_eq!(phase_of(tick_at(&mut driver, epoch, 5.5)), TAU / 2.0);
    }

    #[test]
    fn test_tick_draws_trace_over_chain() {
        use crate::render::DrawCommand;

        let mut driver = AnimationDriver::default();
        let epoch = driver.start(&diamond(), 3, 0.0);
        let mut canvas = RecordingCanvas::new();
        let palette = Palette::default();
        let origin = Point::new(0.0, 0.0);

        driver.tick(epoch, 0.0, &mut canvas, &palette, origin, &[]);
        driver.tick(epoch, 0.1, &mut canvas, &palette, origin, &[]);

        // One clear per frame, trace is the last primitive
        assert_eq!(canvas.clears(), 2);
        match canvas.commands().last() {
            Some(DrawCommand::Polyline { points, color }) => {
                assert_eq!(points.len(), 2);
                assert_eq!(*color, palette.trace);
            }
            other => panic!("expected trace polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_duration_runs_at_minimum() {
        for duration_secs in [0.0, -2.0, f64::NAN] {
            let mut driver = AnimationDriver::new(AnimationConfig { duration_secs });
            let epoch = driver.start(&diamond(), 4, 0.0);

            let phase = phase_of(tick_at(&mut driver, epoch, 0.0));
            assert_eq!(phase, 0.0);

            let phase = phase_of(tick_at(&mut driver, epoch, MIN_DURATION_SECS / 2.0));
            assert_approx_eq!(phase, TAU / 2.0);
            assert!(driver.trace().points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
