//! Full chart render pass: axes, tick marks, legend, title, and curves.
//!
//! Decoration geometry derives from the chart's [`ChartScale`] so the widget
//! draws correctly for any viewport, while text positions and styles that do
//! not depend on the data are pre-computed constants.
//!
//! Draw order matters: decoration first, then the three curves (X red,
//! Y blue, Z green) so telemetry always sits on top of the axis lines.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::chart::VectorChart;
use crate::colors::{AXIS_COLORS, BLACK};
use crate::config::{CENTER_X, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_SECONDS};
use crate::scale::ChartScale;
use crate::styles::{
    AXIS_LABEL_STYLE, CENTERED, FPS_STYLE, LEGEND_STYLE_X, LEGEND_STYLE_Y, LEGEND_STYLE_Z,
    RIGHT_ALIGNED, TITLE_STYLE,
};
use crate::widgets::primitives::{draw_arrowhead, draw_trace};

// =============================================================================
// Fixed Text Positions (pre-computed, layout is known at compile time)
// =============================================================================

/// Channel title, top center.
const TITLE_POS: Point = Point::new(CENTER_X, 22);

/// FPS readout, top right corner.
const FPS_POS: Point = Point::new((SCREEN_WIDTH - 3) as i32, 12);

/// Legend entries, stacked at the bottom right (X above Y above Z).
const LEGEND_POS_X: Point = Point::new((SCREEN_WIDTH - 3) as i32, (SCREEN_HEIGHT - 40) as i32);
const LEGEND_POS_Y: Point = Point::new((SCREEN_WIDTH - 3) as i32, (SCREEN_HEIGHT - 28) as i32);
const LEGEND_POS_Z: Point = Point::new((SCREEN_WIDTH - 3) as i32, (SCREEN_HEIGHT - 16) as i32);

// =============================================================================
// Pre-computed Primitive Styles (const fn in embedded-graphics 0.8)
// =============================================================================

/// 2px black stroke for the axis lines.
const AXIS_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 2);

/// 1px black stroke for tick marks.
const MARK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLACK, 1);

/// Half-length of a tick mark, in pixels.
const MARK_HALF: i32 = 3;

// =============================================================================
// Render Pass
// =============================================================================

/// Draw the complete chart: decoration plus the three telemetry curves.
pub fn draw_chart<D>(
    display: &mut D,
    chart: &VectorChart,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let scale = chart.scale();

    // Channel title, top center
    Text::with_text_style(chart.channel().label(), TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    draw_axes(display, scale);
    mark_time_axis(display, scale);
    mark_value_axis(display, scale);
    draw_legend(display);

    // Curves last so they sit on top of the decoration
    for (axis, &color) in AXIS_COLORS.iter().enumerate() {
        draw_trace(display, chart.axis_points(axis), color);
    }
}

/// Draw the FPS readout in the top right corner.
pub fn draw_fps<D>(
    display: &mut D,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut fps_str: String<16> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::with_text_style(&fps_str, FPS_POS, FPS_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the time and value axes with arrowheads at their positive ends.
fn draw_axes<D>(
    display: &mut D,
    scale: &ChartScale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let origin = scale.origin();
    let half = scale.half_span_y();
    let axis_end_x = origin.x + scale.span_x() as i32;

    // Time axis through the vertical center, arrow pointing right
    Line::new(Point::new(0, origin.y), Point::new(axis_end_x, origin.y))
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();
    draw_arrowhead(
        display,
        Point::new(axis_end_x, origin.y),
        Point::new(axis_end_x - 2 * MARK_HALF, origin.y - MARK_HALF),
        Point::new(axis_end_x - 2 * MARK_HALF, origin.y + MARK_HALF),
        BLACK,
    );

    // Value axis on the left edge, arrow pointing up
    Line::new(Point::new(origin.x, origin.y - half), Point::new(origin.x, origin.y + half))
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();
    draw_arrowhead(
        display,
        Point::new(origin.x, origin.y - half),
        Point::new(origin.x - MARK_HALF, origin.y - half + 2 * MARK_HALF),
        Point::new(origin.x + MARK_HALF, origin.y - half + 2 * MARK_HALF),
        BLACK,
    );
}

/// Tick marks and second labels along the time axis.
fn mark_time_axis<D>(
    display: &mut D,
    scale: &ChartScale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let origin = scale.origin();

    for tick in 0..scale.window() {
        let x = origin.x + scale.x_position(tick) as i32;

        Line::new(Point::new(x, origin.y - MARK_HALF), Point::new(x, origin.y + MARK_HALF))
            .into_styled(MARK_STYLE)
            .draw(display)
            .ok();

        let mut label: String<8> = String::new();
        let seconds = tick as f32 * TICK_SECONDS;
        let _ = write!(label, "{seconds:.1}");
        Text::with_text_style(&label, Point::new(x, origin.y + 14), AXIS_LABEL_STYLE, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Tick marks and range labels at half scale on the value axis.
fn mark_value_axis<D>(
    display: &mut D,
    scale: &ChartScale,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let origin = scale.origin();
    let quarter = scale.half_span_y() / 2;
    let half_range = scale.max_value() / 2;

    for (offset, value) in [(-quarter, half_range), (quarter, -half_range)] {
        let y = origin.y + offset;

        Line::new(Point::new(origin.x - MARK_HALF, y), Point::new(origin.x + MARK_HALF, y))
            .into_styled(MARK_STYLE)
            .draw(display)
            .ok();

        let mut label: String<12> = String::new();
        let _ = write!(label, "{value}");
        Text::with_text_style(&label, Point::new(origin.x + 22, y + 4), AXIS_LABEL_STYLE, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Colored axis legend at the bottom right.
fn draw_legend<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("X", LEGEND_POS_X, LEGEND_STYLE_X, RIGHT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("Y", LEGEND_POS_Y, LEGEND_STYLE_Y, RIGHT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("Z", LEGEND_POS_Z, LEGEND_STYLE_Z, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    use crate::colors::{RED, WHITE};
    use crate::sensor::Channel;

    fn display() -> SimulatorDisplay<Rgb565> {
        SimulatorDisplay::with_default_color(Size::new(240, 320), WHITE)
    }

    fn chart() -> VectorChart {
        VectorChart::new(Channel::Accelerometer, ChartScale::new(240, 320, 5, 10, 6000))
    }

    #[test]
    fn test_draw_chart_renders_axes() {
        let mut d = display();
        draw_chart(&mut d, &chart());

        // Time axis runs through mid-height, value axis along the left margin
        assert_eq!(d.get_pixel(Point::new(0, 160)), BLACK, "time axis should be stroked");
        assert_eq!(d.get_pixel(Point::new(100, 160)), BLACK);
        assert_eq!(d.get_pixel(Point::new(5, 50)), BLACK, "value axis should be stroked");
    }

    #[test]
    fn test_draw_chart_renders_clamped_curve() {
        let mut d = display();
        let mut c = chart();

        // Two ticks of an over-range X reading peg the red curve at the top
        for _ in 0..2 {
            c.handle_sample([9999, 0, -9999]);
            c.tick();
        }
        draw_chart(&mut d, &c);

        // Segment from (5, 0) to (28, 0): the top row carries the X curve
        assert_eq!(d.get_pixel(Point::new(10, 0)), RED, "clamped X curve should hug the top edge");
    }

    #[test]
    fn test_draw_chart_empty_chart_has_no_curves() {
        let mut d = display();
        draw_chart(&mut d, &chart());

        // No ticks yet: the area above the axis stays background
        assert_eq!(d.get_pixel(Point::new(100, 100)), WHITE, "no curve should be drawn before ticks");
    }

    #[test]
    fn test_draw_fps_marks_pixels() {
        let mut d = display();
        draw_fps(&mut d, 50.0);

        // Text should render something near the top right corner
        let mut touched = false;
        for x in 180..240 {
            for y in 0..20 {
                if d.get_pixel(Point::new(x, y)) != WHITE {
                    touched = true;
                }
            }
        }
        assert!(touched, "FPS readout should render glyph pixels");
    }
}
