//! Segment registry: named logical regions over the physical strips.
//!
//! The table is fixed at startup and read-only afterwards; components hold it
//! by reference instead of going through hidden global state.

use core::fmt;

use crate::color::Rgb;
use crate::layout;
use crate::span::Span;

/// Physical strip selector.
///
/// A closed set; the tag is resolved to a buffer by the driver at write time,
/// so segments never carry raw buffer pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripId {
    Body,
    Ornament,
}

impl StripId {
    /// Number of pixels on the strip.
    pub const fn pixel_count(self) -> usize {
        match self {
            Self::Body => layout::BODY_LEDS,
            Self::Ornament => layout::ORNAMENT_LEDS,
        }
    }
}

/// A named logical region bound to one strip.
///
/// `end < start` marks a segment wired against strip order.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub name: &'static str,
    pub strip: StripId,
    /// First physical index, inclusive.
    pub start: usize,
    /// Last physical index, inclusive.
    pub end: usize,
    /// Color the segment shows when lit.
    pub color: Rgb,
}

impl Segment {
    /// Addressing walker over the segment's physical indices.
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Lookup failure for an unknown segment name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentNotFound;

impl fmt::Display for SegmentNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no segment with that name")
    }
}

/// Malformed table entry, rejected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A segment addresses an index past the end of its strip.
    IndexOutOfBounds { name: &'static str, index: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { name, index } => {
                write!(f, "segment {name}: index {index} is outside its strip")
            }
        }
    }
}

/// Immutable registry of segments.
#[derive(Debug, Clone, Copy)]
pub struct SegmentTable<'a> {
    segments: &'a [Segment],
}

impl<'a> SegmentTable<'a> {
    /// Wrap a table without checking it.
    pub const fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    /// Fail-fast startup pass: reject out-of-bounds entries before any
    /// animation runs.
    pub fn validated(segments: &'a [Segment]) -> Result<Self, TableError> {
        for segment in segments {
            let limit = segment.strip.pixel_count();
            for index in [segment.start, segment.end] {
                if index >= limit {
                    return Err(TableError::IndexOutOfBounds {
                        name: segment.name,
                        index,
                    });
                }
            }
        }
        Ok(Self::new(segments))
    }

    /// Exact, case-sensitive lookup. The first match wins if the table holds
    /// duplicate names.
    pub fn resolve(&self, name: &str) -> Result<&'a Segment, SegmentNotFound> {
        self.segments
            .iter()
            .find(|segment| segment.name == name)
            .ok_or(SegmentNotFound)
    }

    pub const fn segments(&self) -> &'a [Segment] {
        self.segments
    }
}
