//! Free-running millisecond counter

/// Hardware tick counter running at 1 kHz
///
/// The counter counts down: its value always lies in `0..period()` and it
/// reloads to `period() - 1` on the tick after reaching zero.
pub trait TickCounter {
    /// Current counter value
    fn read_counter(&self) -> u32;

    /// Number of distinct counter values before the count repeats
    fn period(&self) -> u32;
}

impl<T: TickCounter + ?Sized> TickCounter for &T {
    fn read_counter(&self) -> u32 {
        (**self).read_counter()
    }

    fn period(&self) -> u32 {
        (**self).period()
    }
}
