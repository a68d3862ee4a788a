//! Chart rendering widgets.
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>` so the same code
//! targets the desktop simulator window and off-screen displays in tests.

mod chart;
mod primitives;

pub use chart::{draw_chart, draw_fps};
pub use primitives::{draw_arrowhead, draw_trace};
