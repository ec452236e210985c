#![no_std]

pub mod chase;
pub mod color;
pub mod driver;
pub mod dual_chase;
pub mod effects;
pub mod layout;
pub mod script;
pub mod segment;
pub mod sequencer;
pub mod span;
pub mod ticker;

pub use chase::{Advance, ChaseCursor};
pub use color::Rgb;
pub use driver::MemoryStrips;
pub use dual_chase::DualChase;
pub use script::{Script, Step};
pub use segment::{Segment, SegmentNotFound, SegmentTable, StripId, TableError};
pub use sequencer::{Sequencer, Status};
pub use span::Span;
pub use ticker::Ticker;

pub use embassy_time::{Duration, Instant};

/// Abstract two-strip LED driver
///
/// Implement this trait to support different hardware platforms.
/// Pixel writes are staged; nothing is visible until `commit`.
pub trait StripDriver {
    /// Stage a color at a physical index of one strip
    fn set_pixel(&mut self, strip: StripId, index: usize, color: Rgb);

    /// Flush all staged writes to the physical strips
    fn commit(&mut self);

    /// Turn every pixel of every strip off, implicitly committed
    fn clear_all(&mut self);
}

/// Monotonic time source
///
/// The engine never reads wall-clock time on its own; every suspension is a
/// cooperative poll against this trait.
pub trait Clock {
    /// Current instant, never decreasing
    fn now(&self) -> Instant;
}
