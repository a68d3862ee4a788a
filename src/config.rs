//! Application configuration constants.
//!
//! Layout values like the chart span are computed at compile time as `const`,
//! so the drawing code never repeats the arithmetic per frame. The chart
//! geometry (margin, window, polling interval) is fixed at construction and
//! immutable afterwards; these constants are the single place it is defined.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (small portrait touchscreen, 240x320).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Chart Configuration
// =============================================================================

/// Margin between the screen edge and the chart axes, in pixels.
pub const CHART_MARGIN: u32 = 5;

/// Number of repaint ticks visible on the time axis before scrolling begins.
pub const CHART_WINDOW: u32 = 10;

/// Interval between repaint ticks. One tick advances the time cursor by one
/// slot, so the visible window covers `CHART_WINDOW` ticks of history.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Seconds represented by one tick on the time axis labels.
pub const TICK_SECONDS: f32 = 0.5;

/// Full-scale accelerometer reading. Values beyond this are clamped to the
/// chart's top/bottom edge.
pub const ACCEL_RANGE: i32 = 6000;

/// Full-scale gyroscope reading.
pub const GYRO_RANGE: i32 = 2000;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time for the simulator event loop (~50 FPS). The loop polls
/// the sensor every frame but only repaints the chart on tick boundaries.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames per repaint tick. 25 frames at 20ms = 500ms = `TICK_INTERVAL`.
pub const TICK_FRAMES: u32 = 25;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Horizontal span of the time axis in pixels (`W - 2M`).
/// Pre-computed to avoid arithmetic in the draw path.
pub const CHART_SPAN_X: u32 = SCREEN_WIDTH - 2 * CHART_MARGIN;

/// Half the screen height. The chart origin sits at this y coordinate and
/// values map to `±HALF_HEIGHT` at full scale.
pub const HALF_HEIGHT: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Screen center X coordinate. Used for centering the channel title.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_frames_match_interval() {
        // TICK_FRAMES worth of FRAME_TIME must equal TICK_INTERVAL
        assert_eq!(FRAME_TIME * TICK_FRAMES, TICK_INTERVAL, "frame count should cover one tick");
    }

    #[test]
    fn test_chart_span() {
        assert_eq!(CHART_SPAN_X, 230, "chart span should be screen width minus both margins");
    }

    #[test]
    fn test_positive_constants() {
        // The coordinate mapper divides by these; they must never be zero
        assert!(CHART_WINDOW > 0);
        assert!(ACCEL_RANGE > 0);
        assert!(GYRO_RANGE > 0);
    }
}
