//! Color constants for the chart.
//!
//! The display is a light background with dark decoration, so the three
//! telemetry curves use saturated primary colors that stay readable at 2px
//! stroke width. Rgb565 is native to the small SPI displays this targets,
//! so the constants need no conversion when written out.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure white (31, 63, 31). Chart background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black (0, 0, 0). Axes, labels, and title.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure red (31, 0, 0). X-axis telemetry curve.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31). Y-axis telemetry curve.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure green (0, 63, 0). Z-axis telemetry curve.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Mid gray for the FPS readout. Subtle enough to not distract from data.
/// RGB565: (12, 24, 12) - roughly 40% brightness.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

/// Curve color per axis index (0 = X, 1 = Y, 2 = Z).
pub const AXIS_COLORS: [Rgb565; 3] = [RED, BLUE, GREEN];
