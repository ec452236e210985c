//! Lock-step coordination of two chases with unequal lengths.

use crate::StripDriver;
use crate::chase::ChaseCursor;
use crate::color;
use crate::segment::{SegmentNotFound, SegmentTable};

/// Runs two chase cursors on a shared tick so they loop together instead of
/// drifting apart.
///
/// The longer segment is the synchronization anchor: its wrap defines the
/// cycle a viewer actually sees. The shorter side freezes on its terminal
/// pixel after wrapping, staying lit as a "target reached" marker, and both
/// restart from offset 0 once the anchor catches up.
#[derive(Debug)]
pub struct DualChase<'a> {
    primary: ChaseCursor<'a>,
    secondary: ChaseCursor<'a>,
}

impl<'a> DualChase<'a> {
    /// Pair two named segments. The longer one becomes the anchor; ties keep
    /// argument order.
    pub fn new(table: &SegmentTable<'a>, a: &str, b: &str) -> Result<Self, SegmentNotFound> {
        let first = ChaseCursor::new(table, a)?;
        let second = ChaseCursor::new(table, b)?;
        let (primary, secondary) = if first.span().len() <= second.span().len() {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { primary, secondary })
    }

    /// The shorter side, frozen while it waits for the anchor.
    pub const fn primary(&self) -> &ChaseCursor<'a> {
        &self.primary
    }

    /// The longer side, whose wrap governs the restart.
    pub const fn secondary(&self) -> &ChaseCursor<'a> {
        &self.secondary
    }

    /// Advance both sides one tick.
    ///
    /// Returns `true` when the anchor wrapped and both cursors were restarted
    /// together. With equal lengths the freeze is set and cleared within the
    /// same tick, which needs no special casing.
    pub fn tick(&mut self, strips: &mut impl StripDriver) -> bool {
        // A frozen primary reports no wrap, so this is a no-op while it holds.
        if self.primary.advance(strips).wrapped {
            self.primary.freeze();
        }

        if self.secondary.advance(strips).wrapped {
            // Blank the whole primary span outright rather than the usual
            // single-pixel darkening, then restart it alongside the anchor.
            let segment = self.primary.segment();
            for index in segment.span() {
                strips.set_pixel(segment.strip, index, color::OFF);
            }
            self.primary.reset(strips);
            return true;
        }
        false
    }
}
