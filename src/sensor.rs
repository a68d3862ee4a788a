//! Sensor seam and synthetic signal source.
//!
//! The chart never talks to hardware directly: it consumes plain [`Reading`]
//! triples delivered by whoever owns the event loop. [`VectorSensor`] is the
//! contract a real IMU driver would implement; [`SyntheticImu`] implements it
//! with sine waves so the simulator binary has something to display.

use crate::config::{ACCEL_RANGE, GYRO_RANGE};

/// One raw sample: x, y, z axis readings.
pub type Reading = [i32; 3];

// =============================================================================
// Channel Selection
// =============================================================================

/// Which vector sensor the chart is displaying.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Channel {
    /// Triaxial accelerometer, full scale `ACCEL_RANGE`.
    #[default]
    Accelerometer,

    /// Triaxial gyroscope, full scale `GYRO_RANGE`.
    Gyroscope,
}

impl Channel {
    /// Title shown above the chart for this channel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::Gyroscope => "gyroscope",
        }
    }

    /// Full-scale reading for this channel. Values beyond this clamp to the
    /// chart's vertical limits.
    pub const fn range(self) -> i32 {
        match self {
            Self::Accelerometer => ACCEL_RANGE,
            Self::Gyroscope => GYRO_RANGE,
        }
    }

    /// Toggle to the other channel.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Accelerometer => Self::Gyroscope,
            Self::Gyroscope => Self::Accelerometer,
        }
    }
}

// =============================================================================
// Sensor Contract
// =============================================================================

/// A triaxial vector sensor delivering instantaneous readings.
///
/// The chart only needs the triple; timestamps and driver details stay on
/// the implementor's side.
pub trait VectorSensor {
    /// Read the latest sample.
    fn read(&mut self) -> Reading;
}

// =============================================================================
// Synthetic Source (simulator mode)
// =============================================================================

/// Sine-wave signal generator standing in for a real IMU.
///
/// Each axis oscillates at a different frequency for visual variety. The
/// amplitude deliberately overshoots the channel's full scale by 20% so the
/// chart's clamping behavior is visible at the peaks.
pub struct SyntheticImu {
    /// Time parameter, advanced once per `read()`.
    t: f32,
    /// Peak amplitude (120% of the channel range).
    amplitude: f32,
}

impl SyntheticImu {
    /// Create a generator sized for the given channel's full scale.
    pub fn new(channel: Channel) -> Self {
        Self {
            t: 0.0,
            amplitude: channel.range() as f32 * 1.2,
        }
    }
}

impl VectorSensor for SyntheticImu {
    fn read(&mut self) -> Reading {
        self.t += 0.05;
        let x = (self.t * 0.11).sin() * self.amplitude;
        let y = (self.t * 0.07).sin() * self.amplitude * 0.6;
        let z = (self.t * 0.05).cos() * self.amplitude;
        [x as i32, y as i32, z as i32]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_default() {
        assert_eq!(Channel::default(), Channel::Accelerometer);
    }

    #[test]
    fn test_channel_toggle_cycle() {
        let channel = Channel::Accelerometer;
        let channel = channel.toggle(); // -> Gyroscope
        assert_eq!(channel, Channel::Gyroscope);
        let channel = channel.toggle(); // -> Accelerometer
        assert_eq!(channel, Channel::Accelerometer);
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(Channel::Accelerometer.label(), "accelerometer");
        assert_eq!(Channel::Gyroscope.label(), "gyroscope");
    }

    #[test]
    fn test_channel_ranges_positive() {
        assert!(Channel::Accelerometer.range() > 0);
        assert!(Channel::Gyroscope.range() > 0);
    }

    #[test]
    fn test_synthetic_imu_stays_within_amplitude() {
        let mut imu = SyntheticImu::new(Channel::Accelerometer);
        let limit = (ACCEL_RANGE as f32 * 1.2) as i32 + 1;

        for _ in 0..1000 {
            let [x, y, z] = imu.read();
            assert!(x.abs() <= limit, "x should stay within amplitude");
            assert!(y.abs() <= limit, "y should stay within amplitude");
            assert!(z.abs() <= limit, "z should stay within amplitude");
        }
    }

    #[test]
    fn test_synthetic_imu_overshoots_range() {
        // The generator is sized to exceed full scale so clamping is visible
        let mut imu = SyntheticImu::new(Channel::Gyroscope);
        let mut peak = 0;
        for _ in 0..5000 {
            let [x, _, _] = imu.read();
            peak = peak.max(x.abs());
        }
        assert!(peak > GYRO_RANGE, "synthetic signal should exceed full scale at peaks");
    }
}
