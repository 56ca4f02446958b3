//! Reconstructed curve accumulated frame by frame

use crate::fourier::Point;

/// Append-only log of traced points
///
/// Only `reset()` removes points. It is called when a new animation starts
/// and when a cycle restarts.
#[derive(Clone, Debug, Default)]
pub struct TracePath {
    points: Vec<Point>,
}

impl TracePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the newest traced point
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Points oldest first
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
