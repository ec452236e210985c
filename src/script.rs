//! Lighting scripts for the sequencer.
//!
//! A script is a fixed-capacity queue of steps consumed front to back.

use embassy_time::Duration;
use heapless::Deque;

/// One entry in a lighting script.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Fill a named segment with its default color, hold, and leave it lit.
    Flash(&'static str),
    /// Pause with no pixel change.
    Hold(Duration),
    /// Turn every pixel off (implicitly committed).
    ClearAll,
}

/// Queue of steps to be performed by the sequencer.
///
/// N is the number of steps the queue can hold.
#[derive(Debug, Default)]
pub struct Script<const N: usize> {
    inner: Deque<Step, N>,
}

impl<const N: usize> Script<N> {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Append a step.
    ///
    /// Returns the step if the queue is full.
    pub fn push(&mut self, step: Step) -> Result<(), Step> {
        self.inner.push_back(step)
    }

    /// Append a flash-and-hold of a named segment.
    pub fn push_flash(&mut self, name: &'static str) -> Result<(), Step> {
        self.push(Step::Flash(name))
    }

    /// Append a plain pause.
    pub fn push_hold(&mut self, duration: Duration) -> Result<(), Step> {
        self.push(Step::Hold(duration))
    }

    /// Append a blackout of both strips.
    pub fn push_clear(&mut self) -> Result<(), Step> {
        self.push(Step::ClearAll)
    }

    /// Take the next step off the front of the queue.
    pub fn pop(&mut self) -> Option<Step> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
