//! Stopwatch over a wrapping down-counter
//!
//! Elapsed times are exact across a single counter wrap. A duration longer
//! than one full counter period aliases back into range; callers that can
//! idle that long must drop their marks instead of comparing them.

use crate::traits::TickCounter;

/// Counter sample taken at a past instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTimer(u32);

impl ElapsedTimer {
    /// Wrap a raw counter value
    pub const fn from_raw(count: u32) -> Self {
        Self(count)
    }

    /// Raw counter value of the sample
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Milliseconds from `start` to `now` on a down-counter with `period` values
///
/// ```
/// use remote_touch_core::time::elapsed_between;
/// // No wrap: counted down from 500 to 200
/// assert_eq!(elapsed_between(500, 200, 1000), 300);
/// // Wrapped: 100 -> 0 -> 999 -> 900
/// assert_eq!(elapsed_between(100, 900, 1000), 200);
/// ```
pub fn elapsed_between(start: u32, now: u32, period: u32) -> u32 {
    if start >= now {
        start - now
    } else {
        // Counter rolled over since the sample
        start + period.saturating_sub(now)
    }
}

/// Millisecond stopwatch
pub struct Stopwatch<C> {
    counter: C,
}

impl<C: TickCounter> Stopwatch<C> {
    /// Create a stopwatch over a tick counter
    pub fn new(counter: C) -> Self {
        Self { counter }
    }

    /// Capture the current counter value
    pub fn start(&self) -> ElapsedTimer {
        ElapsedTimer(self.counter.read_counter())
    }

    /// Milliseconds since `timer` was captured
    pub fn elapsed_ms(&self, timer: ElapsedTimer) -> u32 {
        elapsed_between(
            timer.0,
            self.counter.read_counter(),
            self.counter.period(),
        )
    }

    /// Check if at least `duration_ms` has passed since `timer`
    pub fn has_elapsed(&self, timer: ElapsedTimer, duration_ms: u32) -> bool {
        self.elapsed_ms(timer) >= duration_ms
    }

    /// Access the underlying counter
    pub fn counter(&self) -> &C {
        &self.counter
    }
}
