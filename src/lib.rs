//! Scrolling time-series chart for triaxial IMU telemetry.
//!
//! This crate renders live accelerometer/gyroscope readings as a moving-window
//! chart on a small embedded-style display. The reusable pieces are plain
//! logic modules, kept free of display types so they can be tested on the host:
//!
//! - [`aggregate`]: per-axis accumulation and averaging of raw samples between
//!   repaint ticks
//! - [`scale`]: pure mapping from (tick, raw value) to chart coordinates
//! - [`trace`]: fixed-capacity ring buffer holding the displayed history of
//!   one axis
//! - [`chart`]: the chart state machine tying the above together
//! - [`sensor`]: the sensor seam ([`sensor::VectorSensor`]) plus a synthetic
//!   sine-wave source for the simulator
//!
//! Drawing lives in [`widgets`] and is generic over
//! `DrawTarget<Color = Rgb565>`, so the same code renders into the desktop
//! simulator window and into an off-screen display in tests.
//!
//! # Update model
//!
//! Everything runs on one thread. The event loop invokes two handlers:
//! [`chart::VectorChart::handle_sample`] whenever the sensor produces a
//! reading (O(1) append, no scroll logic), and [`chart::VectorChart::tick`]
//! once per repaint interval (average pending samples, push one point per
//! axis, advance the time cursor). If no samples arrived between two ticks,
//! the previous averaged value is reused unchanged - missing data degrades
//! gracefully instead of producing gaps in the curves.

// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

pub mod aggregate;
pub mod chart;
pub mod colors;
pub mod config;
pub mod scale;
pub mod sensor;
pub mod styles;
pub mod trace;
pub mod widgets;

// Re-export commonly used items
pub use chart::VectorChart;
pub use scale::ChartScale;
pub use sensor::{Channel, Reading, SyntheticImu, VectorSensor};
