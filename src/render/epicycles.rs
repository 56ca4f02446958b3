//! Epicycle chain rendering
//!
//! Each component is a vector riding on the tip of the previous one.
//! Drawn components, largest first:
//!
//! ```text
//!   origin --arm--> c1 --arm--> c2 --arm--> ... --> traced point
//!     (guide circle of radius |X_k| around each center)
//! ```

use crate::animation::TracePath;
use crate::fourier::{ComponentSet, Point};

use super::canvas::{Canvas, Palette};

/// Radius of the dots for captured samples and the origin marker
pub const SAMPLE_RADIUS: f64 = 3.0;

/// Draw one frame of the epicycle chain at phase `t`
///
/// Clears the canvas first and paints `underlay` (sample offsets from
/// `origin`, usually empty) beneath the chain. For each component, a guide
/// circle is drawn around the current center and an arm to the new tip.
///
/// # Returns
/// The tip of the last arm (`origin` if `components` is empty)
pub fn render_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    palette: &Palette,
    origin: Point,
    components: &ComponentSet,
    t: f64,
    underlay: &[Point],
) -> Point {
    canvas.clear();
    draw_sample_dots(canvas, palette, origin, underlay);

    let mut center = origin;
    for component in components {
        let tip = center + component.offset_at(t);
        canvas.stroke_circle(center, component.amplitude, palette.guide);
        canvas.line(center, tip, palette.arm);
        center = tip;
    }
    center
}

/// Draw the accumulated trace as one connected path
pub fn draw_trace<C: Canvas + ?Sized>(canvas: &mut C, palette: &Palette, trace: &TracePath) {
    if trace.len() < 2 {
        return;
    }
    canvas.polyline(trace.points(), palette.trace);
}

/// Draw the raw samples of the curve being captured, plus the origin marker
///
/// `samples` are offsets from `origin`.
pub fn draw_samples<C: Canvas + ?Sized>(
    canvas: &mut C,
    palette: &Palette,
    origin: Point,
    samples: &[Point],
) {
    canvas.clear();
    draw_sample_dots(canvas, palette, origin, samples);
    canvas.fill_circle(origin, SAMPLE_RADIUS, palette.origin);
}

/// Dots for `samples` (offsets from `origin`), drawn over whatever is there
fn draw_sample_dots<C: Canvas + ?Sized>(
    canvas: &mut C,
    palette: &Palette,
    origin: Point,
    samples: &[Point],
) {
    for sample in samples {
        canvas.fill_circle(origin + *sample, SAMPLE_RADIUS, palette.sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::transform;
    use crate::render::canvas::{DrawCommand, RecordingCanvas};
    use assert_approx_eq::assert_approx_eq;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, -50.0),
            Point::new(40.0, 30.0),
            Point::new(-40.0, 30.0),
        ]
    }

    #[test]
    fn test_empty_set_returns_origin() {
        let mut canvas = RecordingCanvas::new();
        let origin = Point::new(200.0, 150.0);
        let tip = render_frame(&mut canvas, &Palette::default(), origin, &ComponentSet::default(), 1.3, &[]);

        assert_eq!(tip, origin);
        assert_eq!(canvas.clears(), 1);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_chain_commands() {
        let palette = Palette::default();
        let set = transform(&triangle(), 3);
        let origin = Point::new(100.0, 100.0);
        let mut canvas = RecordingCanvas::new();

        let tip = render_frame(&mut canvas, &palette, origin, &set, 0.7, &[]);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 2 * set.len());

        // Each guide circle is centered where the previous arm ended
        let mut center = origin;
        for (pair, component) in commands.chunks(2).zip(set.iter()) {
            match &pair[0] {
                DrawCommand::StrokeCircle { center: c, radius, color } => {
                    assert_eq!(*c, center);
                    assert_eq!(*radius, component.amplitude);
                    assert_eq!(*color, palette.guide);
                }
                other => panic!("expected guide circle, got {:?}", other),
            }
            match &pair[1] {
                DrawCommand::Line { from, to, color } => {
                    assert_eq!(*from, center);
                    assert_eq!(*color, palette.arm);
                    center = *to;
                }
                other => panic!("expected arm, got {:?}", other),
            }
        }
        assert_eq!(center, tip);
    }

    #[test]
    fn test_tip_matches_evaluate() {
        let set = transform(&triangle(), 3);
        let origin = Point::new(320.0, 240.0);
        let mut canvas = RecordingCanvas::new();

        for t in [0.0, 0.5, 2.0, 5.9] {
            let tip = render_frame(&mut canvas, &Palette::default(), origin, &set, t, &[]);
            let expected = origin + set.evaluate(t);
            assert_approx_eq!(tip.x, expected.x, 1e-9);
            assert_approx_eq!(tip.y, expected.y, 1e-9);
        }
    }

    #[test]
    fn test_underlay_drawn_beneath_chain() {
        let palette = Palette::default();
        let samples = triangle();
        let set = transform(&samples, 3);
        let origin = Point::new(100.0, 100.0);
        let mut canvas = RecordingCanvas::new();

        render_frame(&mut canvas, &palette, origin, &set, 1.1, &samples);

        let commands = canvas.commands();
        assert_eq!(commands.len(), samples.len() + 2 * set.len());
        for (command, sample) in commands.iter().zip(samples.iter()) {
            assert_eq!(
                *command,
                DrawCommand::FillCircle { center: origin + *sample, radius: SAMPLE_RADIUS, color: palette.sample }
            );
        }
        assert!(commands[samples.len()..]
            .iter()
            .all(|c| !matches!(c, DrawCommand::FillCircle { .. })));
        assert!(matches!(commands[samples.len()], DrawCommand::StrokeCircle { .. }));
    }

    #[test]
    fn test_draw_samples_marks_origin_last() {
        let palette = Palette::default();
        let origin = Point::new(50.0, 50.0);
        let mut canvas = RecordingCanvas::new();

        draw_samples(&mut canvas, &palette, origin, &[Point::new(1.0, 2.0), Point::new(-3.0, 4.0)]);

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::FillCircle { center: Point::new(51.0, 52.0), radius: SAMPLE_RADIUS, color: palette.sample },
                DrawCommand::FillCircle { center: Point::new(47.0, 54.0), radius: SAMPLE_RADIUS, color: palette.sample },
                DrawCommand::FillCircle { center: origin, radius: SAMPLE_RADIUS, color: palette.origin },
            ]
        );
    }

    #[test]
    fn test_trace_needs_two_points() {
        let palette = Palette::default();
        let mut trace = TracePath::new();
        let mut canvas = RecordingCanvas::new();

        trace.push(Point::new(1.0, 1.0));
        draw_trace(&mut canvas, &palette, &trace);
        assert!(canvas.commands().is_empty());

        trace.push(Point::new(2.0, 2.0));
        draw_trace(&mut canvas, &palette, &trace);
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::Polyline {
                points: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
                color: palette.trace,
            }]
        );
    }
}
