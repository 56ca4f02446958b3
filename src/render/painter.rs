//! egui drawing surface
//!
//! Adapts an `egui::Painter` to the `Canvas` trait.
//!
//! ## Coordinate System
//!
//! Surface coordinates are pixels from the top-left corner of the
//! allocated rectangle, Y pointing down (same as the screen). The
//! drawing origin is the rectangle's center.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use crate::fourier::Point;

use super::canvas::Canvas;

/// Display settings for the drawing surface
#[derive(Clone, Debug)]
pub struct DisplaySettings {
    /// Background color
    pub background: Color32,

    /// Stroke thickness in pixels for circles, arms and the trace
    pub line_width: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            line_width: 1.0,
        }
    }
}

/// `Canvas` backed by an egui painter for one frame
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
    settings: &'a DisplaySettings,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect, settings: &'a DisplaySettings) -> Self {
        Self {
            painter,
            rect,
            settings,
        }
    }

    /// Convert a surface point to screen coordinates
    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(
            self.rect.left() + point.x as f32,
            self.rect.top() + point.y as f32,
        )
    }

    fn stroke(&self, color: Color32) -> Stroke {
        Stroke::new(self.settings.line_width, color)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self) {
        // egui repaints from scratch each frame; covering the rect is enough
        self.painter.rect_filled(self.rect, 0.0, self.settings.background);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius as f32, color);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius as f32, self.stroke(color));
    }

    fn line(&mut self, from: Point, to: Point, color: Color32) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], self.stroke(color));
    }

    fn polyline(&mut self, points: &[Point], color: Color32) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::line(screen, self.stroke(color)));
    }
}
