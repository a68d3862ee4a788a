//! Pure coordinate mapping from (tick, raw value) to chart space.
//!
//! Chart space is mathematical: the origin sits on the left edge of the time
//! axis at mid-height, x grows rightward with time, y grows upward with the
//! sensor value. The flip to screen coordinates (y growing downward) happens
//! only in [`ChartScale::to_screen`], so the mapping functions themselves stay
//! sign-honest and trivially testable.
//!
//! Both mappings are total: the constructor constants are fixed positive
//! values, so there is no division by zero, and out-of-range inputs clamp
//! instead of failing.

use embedded_graphics::prelude::Point;

/// Fixed chart geometry: viewport, margin, time window, and value range.
///
/// Immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct ChartScale {
    /// Viewport width in pixels.
    width: u32,
    /// Viewport height in pixels.
    height: u32,
    /// Margin between viewport edge and axes, in pixels.
    margin: u32,
    /// Ticks visible on the time axis before scrolling (`T_max`).
    window: u32,
    /// Full-scale value; `±max_value` maps to `±height/2`.
    max_value: i32,
}

impl ChartScale {
    /// Create a scale. `window` and `max_value` must be positive; they are
    /// compile-time constants in practice.
    pub const fn new(width: u32, height: u32, margin: u32, window: u32, max_value: i32) -> Self {
        Self {
            width,
            height,
            margin,
            window,
            max_value,
        }
    }

    /// Ticks visible on the time axis.
    pub const fn window(&self) -> u32 {
        self.window
    }

    /// Full-scale value; used by the widget to label the vertical axis.
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Displayed points per trace: one per tick plus the origin slot.
    pub const fn capacity(&self) -> usize {
        self.window as usize + 1
    }

    /// Horizontal span of the time axis in pixels (`W - 2M`).
    pub const fn span_x(&self) -> u32 {
        self.width - 2 * self.margin
    }

    /// Half the viewport height; full-scale values map to `±half_span_y`.
    pub const fn half_span_y(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// Horizontal chart coordinate for time index `t`.
    ///
    /// Linear in `t` until the window fills, then pinned to the right edge of
    /// the time axis so the chart scrolls under a stationary cursor.
    pub fn x_position(&self, t: u32) -> f32 {
        let span = self.span_x() as f32;
        if t >= self.window {
            span
        } else {
            span * t as f32 / self.window as f32
        }
    }

    /// Vertical chart coordinate for raw value `v` (positive up).
    ///
    /// Linear within `±max_value`, saturating exactly at `±height/2` beyond.
    pub fn y_position(&self, value: i32) -> f32 {
        let half = self.half_span_y() as f32;
        if value > self.max_value {
            half
        } else if value < -self.max_value {
            -half
        } else {
            value as f32 / self.max_value as f32 * half
        }
    }

    /// Map chart coordinates to screen pixels: translate to the chart origin
    /// `(margin, height/2)` and flip the y axis.
    pub fn to_screen(&self, x: f32, y: f32) -> Point {
        Point::new(self.margin as i32 + x as i32, self.half_span_y() - y as i32)
    }

    /// Screen position of the chart origin (left end of the time axis).
    pub const fn origin(&self) -> Point {
        Point::new(self.margin as i32, self.half_span_y())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
