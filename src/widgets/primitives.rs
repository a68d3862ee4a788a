//! Low-level drawing primitives shared by the chart widget.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Triangle};

/// Stroke a polyline through `points` (2px wide).
///
/// Points are consumed oldest to newest; fewer than two points draws
/// nothing. Each segment is stroked individually, matching how the curves
/// scroll one slot at a time.
pub fn draw_trace<D>(
    display: &mut D,
    points: impl IntoIterator<Item = Point>,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 2);
    let mut prev: Option<Point> = None;

    for point in points {
        if let Some(prev_point) = prev {
            Line::new(prev_point, point).into_styled(style).draw(display).ok();
        }
        prev = Some(point);
    }
}

/// Draw a filled triangular arrowhead with its tip at `tip`.
pub fn draw_arrowhead<D>(
    display: &mut D,
    tip: Point,
    base_a: Point,
    base_b: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(tip, base_a, base_b)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics_simulator::SimulatorDisplay;

    use crate::colors::{BLACK, RED, WHITE};

    fn display() -> SimulatorDisplay<Rgb565> {
        SimulatorDisplay::with_default_color(Size::new(64, 64), WHITE)
    }

    #[test]
    fn test_draw_trace_strokes_segments() {
        let mut d = display();
        let points = [Point::new(10, 30), Point::new(30, 10), Point::new(50, 30)];
        draw_trace(&mut d, points, RED);

        // A pixel along the first segment should carry the stroke color
        assert_eq!(d.get_pixel(Point::new(20, 20)), RED, "segment midpoint should be stroked");
    }

    #[test]
    fn test_draw_trace_single_point_draws_nothing() {
        let mut d = display();
        draw_trace(&mut d, [Point::new(10, 10)], RED);
        assert_eq!(d.get_pixel(Point::new(10, 10)), WHITE, "one point forms no segment");
    }

    #[test]
    fn test_draw_trace_empty_draws_nothing() {
        let mut d = display();
        draw_trace(&mut d, [], RED);
        assert_eq!(d.get_pixel(Point::new(32, 32)), WHITE);
    }

    #[test]
    fn test_draw_arrowhead_fills_tip() {
        let mut d = display();
        draw_arrowhead(
            &mut d,
            Point::new(40, 32),
            Point::new(30, 28),
            Point::new(30, 36),
            BLACK,
        );
        assert_eq!(d.get_pixel(Point::new(32, 32)), BLACK, "arrow interior should be filled");
    }
}
