//! Relay click feedback
//!
//! While a remote operator holds the plate hot and nobody is touching it,
//! both relays are flipped together once per period. The pair stays
//! matched, so the Peltier element never sees drive; the contacts just
//! click audibly. A local touch silences the clicks.

use crate::safety::RelaySequencer;
use crate::time::{ElapsedTimer, Stopwatch};
use crate::traits::{Relay, RelayOutputs, TickCounter};

/// Periodic relay clicker
#[derive(Debug, Clone)]
pub struct Clicker {
    /// Minimum time between clicks (ms)
    period_ms: u32,
    /// Time of the last click; `None` clicks on the next opportunity
    last_click: Option<ElapsedTimer>,
}

impl Clicker {
    /// Create a clicker with the given click period
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_click: None,
        }
    }

    /// Click period (ms)
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Time of the last click
    pub fn last_click(&self) -> Option<ElapsedTimer> {
        self.last_click
    }

    /// Flip both relays if a click is due
    ///
    /// No-op while the plate is touched locally. The relays must already be
    /// matched (see [`RelaySequencer::ensure_matched`]). Returns `true` if
    /// the relays were flipped.
    pub fn maybe_click<C: TickCounter, R: RelayOutputs>(
        &mut self,
        is_locally_touched: bool,
        relays: &mut R,
        stopwatch: &Stopwatch<C>,
    ) -> bool {
        if is_locally_touched {
            return false;
        }

        let due = match self.last_click {
            Some(mark) => stopwatch.has_elapsed(mark, self.period_ms),
            None => true,
        };
        if !due {
            return false;
        }

        let next = !relays.relay(Relay::Heat);
        RelaySequencer::set_both(relays, next);
        self.last_click = Some(stopwatch.start());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockCounter {
        value: Cell<u32>,
    }

    impl MockCounter {
        fn advance(&self, ms: u32) {
            self.value.set(self.value.get() - ms);
        }
    }

    impl TickCounter for MockCounter {
        fn read_counter(&self) -> u32 {
            self.value.get()
        }

        fn period(&self) -> u32 {
            1_000_000
        }
    }

    #[derive(Default)]
    struct MockRelays {
        heat: bool,
        cool: bool,
        writes: u32,
    }

    impl RelayOutputs for MockRelays {
        fn set_relay(&mut self, which: Relay, active: bool) {
            self.writes += 1;
            match which {
                Relay::Heat => self.heat = active,
                Relay::Cool => self.cool = active,
            }
        }

        fn relay(&self, which: Relay) -> bool {
            match which {
                Relay::Heat => self.heat,
                Relay::Cool => self.cool,
            }
        }
    }

    #[test]
    fn test_first_call_clicks() {
        let counter = MockCounter {
            value: Cell::new(500_000),
        };
        let stopwatch = Stopwatch::new(&counter);
        let mut clicker = Clicker::new(1000);
        let mut relays = MockRelays::default();

        assert!(clicker.maybe_click(false, &mut relays, &stopwatch));
        assert!(relays.heat && relays.cool);
    }

    #[test]
    fn test_click_throttled_to_period() {
        let counter = MockCounter {
            value: Cell::new(500_000),
        };
        let stopwatch = Stopwatch::new(&counter);
        let mut clicker = Clicker::new(1000);
        let mut relays = MockRelays::default();

        assert!(clicker.maybe_click(false, &mut relays, &stopwatch));

        for _ in 0..9 {
            counter.advance(100);
            assert!(!clicker.maybe_click(false, &mut relays, &stopwatch));
        }
        assert!(relays.heat && relays.cool);

        // 999 ms so far; one more reaches the period
        counter.advance(99);
        assert!(!clicker.maybe_click(false, &mut relays, &stopwatch));
        counter.advance(1);
        assert!(clicker.maybe_click(false, &mut relays, &stopwatch));
        assert!(!relays.heat && !relays.cool);
    }

    #[test]
    fn test_local_touch_silences() {
        let counter = MockCounter {
            value: Cell::new(500_000),
        };
        let stopwatch = Stopwatch::new(&counter);
        let mut clicker = Clicker::new(1000);
        let mut relays = MockRelays::default();

        assert!(!clicker.maybe_click(true, &mut relays, &stopwatch));
        counter.advance(5000);
        assert!(!clicker.maybe_click(true, &mut relays, &stopwatch));
        assert_eq!(relays.writes, 0);
        assert!(clicker.last_click().is_none());
    }

    #[test]
    fn test_click_never_mismatches() {
        let counter = MockCounter {
            value: Cell::new(500_000),
        };
        let stopwatch = Stopwatch::new(&counter);
        let mut clicker = Clicker::new(1000);
        let mut relays = MockRelays::default();

        for _ in 0..10 {
            clicker.maybe_click(false, &mut relays, &stopwatch);
            assert_eq!(relays.heat, relays.cool);
            counter.advance(1000);
        }
    }
}
