//! Scripted flash-and-hold sequencing with a background dual chase.
//!
//! There is exactly one control loop and no preemption: each [`Sequencer::tick`]
//! polls the chase ticker and the current hold deadline independently, so the
//! chase keeps advancing during every hold. All staged writes of a pass land
//! behind a single commit, keeping half-updated frames off the wire.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::{Duration, Instant};

use crate::dual_chase::DualChase;
use crate::layout;
use crate::script::{Script, Step};
use crate::segment::{SegmentNotFound, SegmentTable};
use crate::ticker::{self, Ticker};
use crate::{Clock, StripDriver};

/// Hold applied to each flashed segment.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(200);

/// Step capacity of the warm-up script.
pub const WARM_UP_CAPACITY: usize = 24;

/// How long the finished warm-up frame stays up before the blackout.
const WARM_UP_LINGER: Duration = Duration::from_secs(1);

/// Settle pause after the closing blackout.
const WARM_UP_TAIL: Duration = Duration::from_millis(100);

/// Progress of a [`Sequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Done,
}

/// Cooperative scheduler interleaving a lighting script with chase ticks.
#[derive(Debug)]
pub struct Sequencer<'a, const N: usize> {
    table: SegmentTable<'a>,
    script: Script<N>,
    hold: Duration,
    deadline: Option<Instant>,
    chase: Option<DualChase<'a>>,
    ticker: Ticker,
}

impl<'a, const N: usize> Sequencer<'a, N> {
    pub fn new(table: SegmentTable<'a>, script: Script<N>, hold: Duration) -> Self {
        Self {
            table,
            script,
            hold,
            deadline: None,
            chase: None,
            ticker: Ticker::new(ticker::DEFAULT_TICK),
        }
    }

    /// Run a dual chase in the background for the whole sequence.
    pub fn with_chase(mut self, chase: DualChase<'a>, tick: Duration) -> Self {
        self.chase = Some(chase);
        self.ticker = Ticker::new(tick);
        self
    }

    /// One pass of the control loop.
    ///
    /// Polls the chase cadence and the current hold deadline, starts the next
    /// script step once the hold elapses, and commits at most once.
    pub fn tick(&mut self, now: Instant, strips: &mut impl StripDriver) -> Status {
        let mut dirty = false;

        if let Some(chase) = &mut self.chase {
            if self.ticker.poll(now) {
                chase.tick(strips);
                dirty = true;
            }
        }

        let holding = matches!(self.deadline, Some(deadline) if now < deadline);
        if !holding {
            self.deadline = None;
            while let Some(step) = self.script.pop() {
                match step {
                    Step::Flash(name) => {
                        // Unknown names skip without consuming a hold period.
                        let Ok(segment) = self.table.resolve(name) else {
                            continue;
                        };
                        #[cfg(feature = "esp32-log")]
                        println!("sequence: {}", segment.name);
                        for index in segment.span() {
                            strips.set_pixel(segment.strip, index, segment.color);
                        }
                        dirty = true;
                        self.deadline = Some(now + self.hold);
                        break;
                    }
                    Step::Hold(duration) => {
                        self.deadline = Some(now + duration);
                        break;
                    }
                    Step::ClearAll => {
                        strips.clear_all();
                    }
                }
            }
        }

        if dirty {
            strips.commit();
        }

        if self.deadline.is_none() && self.script.is_empty() {
            Status::Done
        } else {
            Status::Running
        }
    }

    /// Busy-poll [`tick`](Self::tick) to completion against the clock.
    pub fn run(&mut self, clock: &impl Clock, strips: &mut impl StripDriver) {
        while self.tick(clock.now(), strips) == Status::Running {}
    }
}

/// The fixture warm-up routine.
///
/// Every segment is flashed and held in fixture order while the antenna pair
/// chases continuously in the background; the finished frame lingers, then
/// the fixture blacks out.
pub fn warm_up(
    table: SegmentTable<'_>,
) -> Result<Sequencer<'_, WARM_UP_CAPACITY>, SegmentNotFound> {
    let mut script = Script::new();
    let _ = script.push_clear();
    for &name in layout::WARM_UP_ORDER {
        let _ = script.push_flash(name);
    }
    let _ = script.push_hold(WARM_UP_LINGER);
    let _ = script.push_clear();
    let _ = script.push_hold(WARM_UP_TAIL);

    let (left, right) = layout::CHASE_PAIR;
    let chase = DualChase::new(&table, left, right)?;

    Ok(Sequencer::new(table, script, DEFAULT_HOLD).with_chase(chase, ticker::DEFAULT_TICK))
}
