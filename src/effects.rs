//! Stateless segment effects and fixture diagnostics.
//!
//! Everything here resolves a segment by name and walks its span; unknown
//! names are silently skipped so a typo in a lighting script degrades to a
//! missing effect instead of aborting the sequence.

use embassy_time::Duration;

use crate::color::{self, Rgb};
use crate::segment::{Segment, SegmentTable, StripId};
use crate::{Clock, StripDriver};

/// How long the fully walked fixture stays lit before blanking.
const WALK_LINGER: Duration = Duration::from_secs(1);

/// Busy-wait against the monotonic clock.
///
/// Suspension is cooperative polling, not blocking I/O.
fn pause(clock: &impl Clock, duration: Duration) {
    let deadline = clock.now() + duration;
    while clock.now() < deadline {}
}

fn write_span(segment: &Segment, shade: Rgb, strips: &mut impl StripDriver) {
    for index in segment.span() {
        strips.set_pixel(segment.strip, index, shade);
    }
}

fn fill_strips(shade: Rgb, strips: &mut impl StripDriver) {
    for strip in [StripId::Body, StripId::Ornament] {
        for index in 0..strip.pixel_count() {
            strips.set_pixel(strip, index, shade);
        }
    }
}

/// Stage the default color over a named segment, in span order.
///
/// Stages only; the caller decides when to commit.
pub fn fill_segment(table: &SegmentTable<'_>, name: &str, strips: &mut impl StripDriver) {
    if let Ok(segment) = table.resolve(name) {
        write_span(segment, segment.color, strips);
    }
}

/// Stage the off color over a named segment.
pub fn clear_segment(table: &SegmentTable<'_>, name: &str, strips: &mut impl StripDriver) {
    if let Ok(segment) = table.resolve(name) {
        write_span(segment, color::OFF, strips);
    }
}

/// Fill a named segment, commit, and hold it.
///
/// With `clear_after` the span is staged back to off before the second hold;
/// the cleared pixels become visible at the next commit. Unknown names return
/// immediately, without consuming either hold.
pub fn flash_segment(
    table: &SegmentTable<'_>,
    name: &str,
    strips: &mut impl StripDriver,
    clock: &impl Clock,
    hold: Duration,
    clear_after: bool,
) {
    let Ok(segment) = table.resolve(name) else {
        return;
    };

    write_span(segment, segment.color, strips);
    strips.commit();
    pause(clock, hold);

    if clear_after {
        write_span(segment, color::OFF, strips);
    }
    pause(clock, hold);
}

/// Stage every segment at its default color.
pub fn fill_all(table: &SegmentTable<'_>, strips: &mut impl StripDriver) {
    for segment in table.segments() {
        write_span(segment, segment.color, strips);
    }
}

/// Light the whole fixture, hold, then blank it and hold again.
pub fn all_on(
    table: &SegmentTable<'_>,
    strips: &mut impl StripDriver,
    clock: &impl Clock,
    hold: Duration,
) {
    fill_all(table, strips);
    strips.commit();
    pause(clock, hold);
    strips.clear_all();
    pause(clock, hold);
}

/// Power-on self test: ramp both strips black to white and back.
pub fn fade_strips(strips: &mut impl StripDriver, clock: &impl Clock, dwell: Duration) {
    strips.clear_all();

    for level in (0..=255u8).step_by(5) {
        let shade = Rgb {
            r: level,
            g: level,
            b: level,
        };
        fill_strips(shade, strips);
        strips.commit();
        pause(clock, dwell);
    }
    for level in (0..=255u8).step_by(5).rev() {
        let shade = Rgb {
            r: level,
            g: level,
            b: level,
        };
        fill_strips(shade, strips);
        strips.commit();
        pause(clock, dwell);
    }

    strips.clear_all();
}

/// Wiring diagnostic: light every LED of every segment one at a time, in span
/// order, leaving them lit; then hold the full fixture and blank it.
pub fn walk_segments(
    table: &SegmentTable<'_>,
    strips: &mut impl StripDriver,
    clock: &impl Clock,
    dwell: Duration,
) {
    strips.clear_all();

    for segment in table.segments() {
        for index in segment.span() {
            strips.set_pixel(segment.strip, index, segment.color);
            strips.commit();
            pause(clock, dwell);
        }
    }

    pause(clock, WALK_LINGER);
    strips.clear_all();
}
