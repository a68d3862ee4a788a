//! Per-axis sample accumulation and averaging between repaint ticks.
//!
//! The sensor can deliver readings faster or slower than the repaint
//! interval. [`SampleAccumulator`] decouples the two rates: every arriving
//! triple is appended to three per-axis pending lists (O(1), safe to call
//! from the data-arrived handler), and once per tick [`SampleAccumulator::drain`]
//! collapses whatever arrived into one representative value per axis.
//!
//! # Missing-data policy
//!
//! If no samples arrived since the previous tick, `drain` returns the
//! previous representative value unchanged. This is deliberate: a sensor
//! hiccup holds the curve at its last level instead of snapping to zero or
//! leaving a gap. The accumulator starts at `[0, 0, 0]`, so a chart that has
//! never seen data draws a flat line on the time axis.

use crate::sensor::Reading;

/// Pending-list capacity reserved up front. At one sample per 20ms frame and
/// a 500ms tick this holds 20x headroom before any reallocation.
const PENDING_CAPACITY: usize = 500;

/// Accumulates raw samples between ticks and averages them on demand.
pub struct SampleAccumulator {
    /// Samples received since the last drain, one list per axis.
    pending: [Vec<i32>; 3],

    /// Representative value per axis from the most recent non-empty drain.
    current: Reading,
}

impl SampleAccumulator {
    /// Create an empty accumulator with pre-reserved pending lists.
    pub fn new() -> Self {
        Self {
            pending: [
                Vec::with_capacity(PENDING_CAPACITY),
                Vec::with_capacity(PENDING_CAPACITY),
                Vec::with_capacity(PENDING_CAPACITY),
            ],
            current: [0, 0, 0],
        }
    }

    /// Append one raw reading. O(1) amortized; called from the
    /// sensor-data-arrived handler.
    pub fn push(&mut self, reading: Reading) {
        for (axis, value) in reading.iter().enumerate() {
            self.pending[axis].push(*value);
        }
    }

    /// Collapse the pending samples into one representative value per axis
    /// and clear the pending lists.
    ///
    /// An axis with no pending samples keeps its previous value (see the
    /// module docs for why). Averaging sums into `i64` so a full pending
    /// list of extreme `i32` readings cannot overflow, then truncates
    /// toward zero.
    pub fn drain(&mut self) -> Reading {
        for axis in 0..3 {
            if !self.pending[axis].is_empty() {
                self.current[axis] = average(&self.pending[axis]);
            }
            self.pending[axis].clear();
        }
        self.current
    }

    /// The representative values from the most recent drain.
    pub const fn current(&self) -> Reading {
        self.current
    }
}

impl Default for SampleAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean with i64 accumulation, truncating toward zero.
///
/// Callers guarantee `samples` is non-empty.
fn average(samples: &[i32]) -> i32 {
    let sum: i64 = samples.iter().map(|&v| i64::from(v)).sum();
    (sum / samples.len() as i64) as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Averaging Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_average_truncates_toward_zero() {
        // [1, 2, 3] -> 2 and [1, 2] -> 1 (truncated, not rounded)
        assert_eq!(average(&[1, 2, 3]), 2, "average of 1,2,3 should be 2");
        assert_eq!(average(&[1, 2]), 1, "average of 1,2 should truncate to 1");
    }

    #[test]
    fn test_average_negative_truncates_toward_zero() {
        // i64 division truncates toward zero, matching positive behavior
        assert_eq!(average(&[-1, -2]), -1, "average of -1,-2 should truncate to -1");
        assert_eq!(average(&[-1, -2, -3]), -2);
    }

    #[test]
    fn test_average_no_overflow_at_extremes() {
        // A pending list of i32::MAX values would overflow an i32 sum
        let samples = vec![i32::MAX; 100];
        assert_eq!(average(&samples), i32::MAX, "wide accumulator should avoid overflow");

        let samples = vec![i32::MIN; 100];
        assert_eq!(average(&samples), i32::MIN);
    }

    // -------------------------------------------------------------------------
    // Accumulator Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_starts_at_zero() {
        let acc = SampleAccumulator::new();
        assert_eq!(acc.current(), [0, 0, 0], "initial representative value should be zeros");
    }

    #[test]
    fn test_drain_averages_per_axis() {
        let mut acc = SampleAccumulator::new();
        acc.push([10, 100, -10]);
        acc.push([20, 200, -20]);
        acc.push([30, 300, -30]);

        assert_eq!(acc.drain(), [20, 200, -20], "each axis should average independently");
    }

    #[test]
    fn test_drain_empty_batch_keeps_stale_value() {
        let mut acc = SampleAccumulator::new();
        acc.push([5, 6, 7]);
        assert_eq!(acc.drain(), [5, 6, 7]);

        // No samples arrived before the next tick: previous values persist
        assert_eq!(acc.drain(), [5, 6, 7], "empty batch should reuse the prior tick's value");
        assert_eq!(acc.drain(), [5, 6, 7], "stale value should persist across repeated drains");
    }

    #[test]
    fn test_drain_clears_pending() {
        let mut acc = SampleAccumulator::new();
        acc.push([100, 100, 100]);
        acc.drain();

        // The earlier samples must not leak into the next batch
        acc.push([0, 0, 0]);
        assert_eq!(acc.drain(), [0, 0, 0], "drain should clear the pending lists");
    }

    #[test]
    fn test_single_sample_is_its_own_average() {
        let mut acc = SampleAccumulator::new();
        acc.push([42, -42, 0]);
        assert_eq!(acc.drain(), [42, -42, 0]);
    }
}
