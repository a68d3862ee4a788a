//! Chart state: time cursor, per-axis traces, and the two event handlers.
//!
//! [`VectorChart`] is the single mutable object behind the widget. The event
//! loop drives it with exactly two calls:
//!
//! - [`VectorChart::handle_sample`] whenever the sensor delivers a reading.
//!   This only appends to the accumulator; no scroll logic runs here, so the
//!   handler is O(1) and safe at any arrival rate.
//! - [`VectorChart::tick`] once per repaint interval. This collapses the
//!   accumulated samples into one representative value per axis, maps each
//!   to chart coordinates, pushes one point into each trace, and advances
//!   the time cursor.
//!
//! The cursor counts ticks from 0 and stops advancing at `window + 1`; past
//! that point the traces scroll instead of growing, which is what produces
//! the moving-window effect. State lives only as long as the chart: there is
//! no persistence and dropping the value is the whole shutdown story.

use embedded_graphics::prelude::Point;

use crate::aggregate::SampleAccumulator;
use crate::scale::ChartScale;
use crate::sensor::{Channel, Reading};
use crate::trace::Trace;

/// Scrolling time-series chart state for one triaxial sensor.
pub struct VectorChart {
    /// Which sensor is displayed (title and full-scale range).
    channel: Channel,
    /// Fixed coordinate mapping, immutable after construction.
    scale: ChartScale,
    /// Raw samples accumulated between ticks.
    accumulator: SampleAccumulator,
    /// Displayed history per axis, each bounded to `window + 1` points.
    traces: [Trace; 3],
    /// Discrete time cursor; increments per tick, caps at `window + 1`.
    time: u32,
}

impl VectorChart {
    /// Create a chart for `channel` with the given geometry.
    pub fn new(channel: Channel, scale: ChartScale) -> Self {
        Self {
            channel,
            scale,
            accumulator: SampleAccumulator::new(),
            traces: [
                Trace::new(scale.capacity()),
                Trace::new(scale.capacity()),
                Trace::new(scale.capacity()),
            ],
            time: 0,
        }
    }

    /// Sensor-data-arrived handler: queue one raw reading.
    pub fn handle_sample(&mut self, reading: Reading) {
        self.accumulator.push(reading);
    }

    /// Repaint-tick handler: average the queued samples, push one displayed
    /// point per axis, advance the time cursor.
    pub fn tick(&mut self) {
        let values = self.accumulator.drain();
        for (axis, trace) in self.traces.iter_mut().enumerate() {
            trace.push(self.scale.y_position(values[axis]));
        }

        // Cap the cursor one past the window; x_position clamps from there on
        if self.time <= self.scale.window() {
            self.time += 1;
        }
    }

    /// The displayed channel.
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The chart geometry.
    pub const fn scale(&self) -> &ChartScale {
        &self.scale
    }

    /// Current tick count (capped at `window + 1`).
    pub const fn time(&self) -> u32 {
        self.time
    }

    /// Chart-space y values for one axis, oldest to newest.
    ///
    /// # Panics
    /// Panics if `axis >= 3`.
    pub fn axis_values(&self, axis: usize) -> impl Iterator<Item = f32> + '_ {
        self.traces[axis].iter()
    }

    /// Screen-space points for one axis, oldest to newest. The i-th
    /// chronological point sits at `x_position(i)`, so once the traces
    /// scroll, history slides left under fixed x slots.
    ///
    /// # Panics
    /// Panics if `axis >= 3`.
    pub fn axis_points(&self, axis: usize) -> impl Iterator<Item = Point> + '_ {
        let scale = &self.scale;
        self.traces[axis]
            .iter()
            .enumerate()
            .map(move |(slot, y)| scale.to_screen(scale.x_position(slot as u32), y))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
