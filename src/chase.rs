//! Single-pixel chase state machine.

use crate::StripDriver;
use crate::color;
use crate::segment::{Segment, SegmentNotFound, SegmentTable};
use crate::span::Span;

/// Outcome of one [`ChaseCursor::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// A pixel write happened this tick.
    pub changed: bool,
    /// The cursor completed a full pass and returned to offset 0.
    pub wrapped: bool,
}

impl Advance {
    const NONE: Self = Self {
        changed: false,
        wrapped: false,
    };
}

/// Moving-dot cursor over one segment.
///
/// Each advance lights one position and darkens the previous one, so at most
/// one pixel of the segment is lit between ticks. Writes are staged only; the
/// owning loop decides when to commit.
#[derive(Debug)]
pub struct ChaseCursor<'a> {
    segment: &'a Segment,
    span: Span,
    offset: usize,
    last_lit: Option<usize>,
    frozen: bool,
}

impl<'a> ChaseCursor<'a> {
    /// Bind a cursor to a named segment.
    ///
    /// Unlike the static effects, an unknown name refuses construction: a
    /// chase with no segment has no meaningful state.
    pub fn new(table: &SegmentTable<'a>, name: &str) -> Result<Self, SegmentNotFound> {
        Ok(Self::for_segment(table.resolve(name)?))
    }

    pub const fn for_segment(segment: &'a Segment) -> Self {
        Self {
            segment,
            span: segment.span(),
            offset: 0,
            last_lit: None,
            frozen: false,
        }
    }

    pub const fn segment(&self) -> &'a Segment {
        self.segment
    }

    pub const fn span(&self) -> Span {
        self.span
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Hold the currently lit pixel; advances become no-ops until [`reset`].
    ///
    /// [`reset`]: Self::reset
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Advance one position.
    ///
    /// Lights the new position first, then darkens the previous one, so the
    /// segment never goes fully dark mid-tick. A frozen cursor reports
    /// neither change nor wrap.
    pub fn advance(&mut self, strips: &mut impl StripDriver) -> Advance {
        if self.frozen {
            return Advance::NONE;
        }

        let pos = self.span.position(self.offset);
        strips.set_pixel(self.segment.strip, pos, self.segment.color);
        if let Some(prev) = self.last_lit {
            // Skipped on single-pixel segments, where the position never moves.
            if prev != pos {
                strips.set_pixel(self.segment.strip, prev, color::OFF);
            }
        }

        self.last_lit = Some(pos);
        self.offset = (self.offset + 1) % self.span.len();
        Advance {
            changed: true,
            wrapped: self.offset == 0,
        }
    }

    /// Darken the lit pixel and return to the initial state, unfrozen.
    pub fn reset(&mut self, strips: &mut impl StripDriver) {
        if let Some(prev) = self.last_lit {
            strips.set_pixel(self.segment.strip, prev, color::OFF);
        }
        self.offset = 0;
        self.last_lit = None;
        self.frozen = false;
    }
}
