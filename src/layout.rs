//! Shipped fixture layout: two 50-pixel strips and the segment table.
//!
//! The table is the only configuration artifact of the engine. Segments may
//! overlap, and a few are wired against strip order (`end < start`).

use crate::color;
use crate::segment::{Segment, SegmentTable, StripId};

pub const BODY_LEDS: usize = 50;
pub const ORNAMENT_LEDS: usize = 50;

/// Fixed segment table for the fixture.
pub const SEGMENTS: &[Segment] = &[
    Segment { name: "LEFT_EYE", strip: StripId::Body, start: 24, end: 24, color: color::BLUE },
    Segment { name: "RIGHT_EYE", strip: StripId::Body, start: 23, end: 23, color: color::BLUE },
    Segment { name: "NOSE", strip: StripId::Body, start: 22, end: 22, color: color::EMBER },
    Segment { name: "MOUTH", strip: StripId::Body, start: 19, end: 21, color: color::DARK_RED },
    Segment { name: "HAIR_0", strip: StripId::Body, start: 25, end: 30, color: color::YELLOW },
    Segment { name: "HAIR_1", strip: StripId::Body, start: 33, end: 36, color: color::YELLOW },
    Segment { name: "LEFT_BOW", strip: StripId::Body, start: 43, end: 44, color: color::RED },
    Segment { name: "RIGHT_BOW", strip: StripId::Body, start: 31, end: 32, color: color::RED },
    Segment { name: "LEFT_ANTENNA", strip: StripId::Body, start: 45, end: 49, color: color::PURPLE },
    // Wired tip-first, so it walks downwards and is one pixel longer than the
    // left side.
    Segment { name: "RIGHT_ANTENNA", strip: StripId::Body, start: 42, end: 37, color: color::PURPLE },
    Segment { name: "DRESS", strip: StripId::Body, start: 18, end: 0, color: color::DEEP_PINK },
    Segment { name: "ORNAMENT_0", strip: StripId::Ornament, start: 49, end: 49, color: color::RED },
    Segment { name: "ORNAMENT_1", strip: StripId::Ornament, start: 44, end: 48, color: color::RED },
    Segment { name: "ORNAMENT_2", strip: StripId::Ornament, start: 34, end: 43, color: color::RED },
    Segment { name: "ORNAMENT_3", strip: StripId::Ornament, start: 19, end: 33, color: color::RED },
    Segment { name: "ORNAMENT_4", strip: StripId::Ornament, start: 0, end: 18, color: color::RED },
];

/// Warm-up activation order, one flash-and-hold per entry.
pub const WARM_UP_ORDER: &[&str] = &[
    "LEFT_EYE",
    "RIGHT_EYE",
    "NOSE",
    "MOUTH",
    "HAIR_0",
    "HAIR_1",
    "LEFT_BOW",
    "RIGHT_BOW",
    "LEFT_ANTENNA",
    "RIGHT_ANTENNA",
    "DRESS",
    "ORNAMENT_0",
    "ORNAMENT_1",
    "ORNAMENT_2",
    "ORNAMENT_3",
    "ORNAMENT_4",
];

/// Antenna pair chased in the warm-up background. The sides have different
/// lengths, which is what the dual-chase synchronizer exists for.
pub const CHASE_PAIR: (&str, &str) = ("LEFT_ANTENNA", "RIGHT_ANTENNA");

/// Registry over the shipped table.
pub const fn table() -> SegmentTable<'static> {
    SegmentTable::new(SEGMENTS)
}
