//! In-memory reference implementation of the driver seam.
//!
//! Hardware back ends implement [`StripDriver`](crate::StripDriver) against a
//! real protocol; this one keeps staged and committed pixel state in plain
//! arrays so previews and tests can observe whole frames.

use crate::StripDriver;
use crate::color::{self, Rgb};
use crate::layout::{BODY_LEDS, ORNAMENT_LEDS};
use crate::segment::StripId;

/// Both strips as plain pixel arrays.
///
/// `set_pixel` stages; `commit` publishes the staged state as the "shown"
/// frame, the way a hardware driver flushes to the wire.
#[derive(Debug, Clone)]
pub struct MemoryStrips {
    body: [Rgb; BODY_LEDS],
    ornament: [Rgb; ORNAMENT_LEDS],
    shown_body: [Rgb; BODY_LEDS],
    shown_ornament: [Rgb; ORNAMENT_LEDS],
}

impl MemoryStrips {
    pub const fn new() -> Self {
        Self {
            body: [color::OFF; BODY_LEDS],
            ornament: [color::OFF; ORNAMENT_LEDS],
            shown_body: [color::OFF; BODY_LEDS],
            shown_ornament: [color::OFF; ORNAMENT_LEDS],
        }
    }

    /// Staged, not yet committed, pixels of one strip.
    pub fn staged(&self, strip: StripId) -> &[Rgb] {
        match strip {
            StripId::Body => &self.body,
            StripId::Ornament => &self.ornament,
        }
    }

    /// Pixels as last committed.
    pub fn shown(&self, strip: StripId) -> &[Rgb] {
        match strip {
            StripId::Body => &self.shown_body,
            StripId::Ornament => &self.shown_ornament,
        }
    }
}

impl Default for MemoryStrips {
    fn default() -> Self {
        Self::new()
    }
}

impl StripDriver for MemoryStrips {
    fn set_pixel(&mut self, strip: StripId, index: usize, color: Rgb) {
        match strip {
            StripId::Body => self.body[index] = color,
            StripId::Ornament => self.ornament[index] = color,
        }
    }

    fn commit(&mut self) {
        self.shown_body = self.body;
        self.shown_ornament = self.ornament;
    }

    fn clear_all(&mut self) {
        self.body = [color::OFF; BODY_LEDS];
        self.ornament = [color::OFF; ORNAMENT_LEDS];
        self.commit();
    }
}
