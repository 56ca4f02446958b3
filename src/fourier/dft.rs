//! Truncated discrete Fourier transform
//!
//! A closed curve sampled as N points `z_n = x_n + i*y_n` is decomposed into
//! K rotating vectors:
//!
//! ```text
//! X_k = (1/N) * sum_n z_n * e^(-i*2*pi*k*n/N)        k in [0, K)
//! ```
//!
//! Each `X_k` becomes a [`Component`] spinning at `k` radians per unit of
//! animation phase. Summing all of them at `t = 2*pi*n/N` reproduces sample
//! `n` when K == N. This is the plain O(N*K) transform, not an FFT.

use std::f64::consts::TAU;

use nalgebra::Complex;

use super::point::Point;

/// One rotating vector of the reconstruction
///
/// Angular speed is `frequency`, radius is `amplitude`, starting angle is
/// `phase`. The raw transform outputs `re`/`im` are kept alongside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Component {
    pub frequency: usize,
    pub amplitude: f64,
    pub phase: f64,
    pub re: f64,
    pub im: f64,
}

impl Component {
    fn from_coefficient(frequency: usize, c: Complex<f64>) -> Self {
        let (amplitude, phase) = c.to_polar();
        Self {
            frequency,
            amplitude,
            phase,
            re: c.re,
            im: c.im,
        }
    }

    /// Offset of this vector's tip from its center at animation phase `t`
    pub fn offset_at(&self, t: f64) -> Point {
        let angle = self.frequency as f64 * t + self.phase;
        Point::new(self.amplitude * angle.cos(), self.amplitude * angle.sin())
    }
}

/// Components ranked by descending amplitude
///
/// Immutable once built; equal amplitudes keep frequency order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentSet {
    components: Vec<Component>,
}

impl ComponentSet {
    /// Get the number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Find the component spinning at `frequency`, if it was retained
    #[cfg(test)]
    pub fn by_frequency(&self, frequency: usize) -> Option<&Component> {
        self.components.iter().find(|c| c.frequency == frequency)
    }

    /// Sum of all vectors at phase `t`, relative to the origin
    ///
    /// Same point the renderer traces, without drawing anything.
    pub fn evaluate(&self, t: f64) -> Point {
        self.components
            .iter()
            .fold(Point::ORIGIN, |acc, c| acc + c.offset_at(t))
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Compute the first `precision` Fourier components of `points`
///
/// Callers only invoke this with at least two points; see
/// `SampleBuffer::freeze`. The result always holds exactly `precision`
/// components, sorted by descending amplitude.
pub fn transform(points: &[Point], precision: usize) -> ComponentSet {
    let n = points.len();
    let mut components: Vec<Component> = (0..precision)
        .map(|k| {
            let sum = points
                .iter()
                .enumerate()
                .fold(Complex::new(0.0, 0.0), |acc, (i, p)| {
                    let theta = TAU * k as f64 * i as f64 / n as f64;
                    acc + Complex::new(p.x, p.y) * Complex::from_polar(1.0, -theta)
                });
            Component::from_coefficient(k, sum / n as f64)
        })
        .collect();

    // sort_by is stable, so equal amplitudes stay in frequency order
    components.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));

    ComponentSet { components }
}
