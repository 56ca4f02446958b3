//! Drawing surface abstraction
//!
//! The epicycle renderer only talks to a `Canvas`, so the same drawing
//! code paints into egui and into a recorder for tests.

use eframe::egui::Color32;

use crate::fourier::Point;

/// A 2D drawing context in surface coordinates
pub trait Canvas {
    /// Wipe everything drawn so far this frame
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color32);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color32);

    fn line(&mut self, from: Point, to: Point, color: Color32);

    /// Connected segments through `points` in order
    fn polyline(&mut self, points: &[Point], color: Color32);
}

/// Colors used for every drawn element
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Raw captured points
    pub sample: Color32,
    /// Marker at the drawing origin
    pub origin: Color32,
    /// Epicycle guide circles
    pub guide: Color32,
    /// Rotating arms between circle centers
    pub arm: Color32,
    /// Reconstructed curve
    pub trace: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sample: Color32::WHITE,
            origin: Color32::from_rgb(255, 0, 0),
            guide: Color32::from_rgba_unmultiplied(255, 255, 255, 77), // 30% opacity
            arm: Color32::WHITE,
            trace: Color32::from_rgb(0, 255, 255),
        }
    }
}

/// A single recorded draw call
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Point,
        radius: f64,
        color: Color32,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color32,
    },
    Line {
        from: Point,
        to: Point,
        color: Color32,
    },
    Polyline {
        points: Vec<Point>,
        color: Color32,
    },
}

/// Canvas that records draw calls instead of painting them
///
/// `clear()` drops earlier commands, so `commands()` is always the
/// content of the current frame.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clears: usize,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface was cleared
    pub fn clears(&self) -> usize {
        self.clears
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color32) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color32) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color });
    }

    fn line(&mut self, from: Point, to: Point, color: Color32) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn polyline(&mut self, points: &[Point], color: Color32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
        });
    }
}
