//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so every style the chart needs is computed at
//! compile time and stored in the binary's read-only data section. The
//! legend styles pair the small label font with each curve color.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, BLUE, GRAY, GREEN, RED};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for the channel title and axis labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Right-aligned text. Used for the legend and the FPS readout.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small black text for axis tick labels on the light background.
pub const AXIS_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small gray text for the FPS readout.
pub const FPS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Channel title text (`ProFont` 18pt black, top center).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, BLACK);

/// Legend entry for the X curve (red).
pub const LEGEND_STYLE_X: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, RED);

/// Legend entry for the Y curve (blue).
pub const LEGEND_STYLE_Y: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLUE);

/// Legend entry for the Z curve (green).
pub const LEGEND_STYLE_Z: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);
