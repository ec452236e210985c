//! Color type and the fixture palette.
//!
//! Flat RGB triples only; color correction and gamma belong to the driver.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Zero intensity, the "darkened" state of a pixel.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
/// Nose tone, a quarter dimmer than plain orange-red.
pub const EMBER: Rgb = Rgb { r: 191, g: 52, b: 0 };
pub const DARK_RED: Rgb = Rgb { r: 139, g: 0, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const PURPLE: Rgb = Rgb { r: 128, g: 0, b: 128 };
pub const DEEP_PINK: Rgb = Rgb { r: 255, g: 20, b: 147 };
