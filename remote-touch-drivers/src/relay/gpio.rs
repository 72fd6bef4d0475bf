//! GPIO relay pair
//!
//! Drives the heat and cool relays from two GPIO pins (directly or through
//! a transistor/driver stage).

use remote_touch_core::traits::{Relay, RelayOutputs};
use remote_touch_hal::OutputPin;

/// Relay pair on two GPIO pins
///
/// Both relays share one polarity. Construction leaves both relays open.
pub struct GpioRelayPair<H, C> {
    heat: H,
    cool: C,
    /// If true, relay active = pin LOW
    inverted: bool,
}

impl<H: OutputPin, C: OutputPin> GpioRelayPair<H, C> {
    /// Create a new relay pair
    ///
    /// # Arguments
    /// - `heat`: Pin of the heat-polarity relay
    /// - `cool`: Pin of the cool-polarity relay
    /// - `inverted`: If true, a relay is active when its pin is LOW
    pub fn new(heat: H, cool: C, inverted: bool) -> Self {
        let mut pair = Self {
            heat,
            cool,
            inverted,
        };
        // Ensure both relays start open
        pair.set_relay(Relay::Cool, false);
        pair.set_relay(Relay::Heat, false);
        pair
    }

    /// Create a relay pair with active-high pins
    pub fn new_active_high(heat: H, cool: C) -> Self {
        Self::new(heat, cool, false)
    }

    /// Release the pins
    pub fn into_pins(self) -> (H, C) {
        (self.heat, self.cool)
    }
}

impl<H: OutputPin, C: OutputPin> RelayOutputs for GpioRelayPair<H, C> {
    fn set_relay(&mut self, which: Relay, active: bool) {
        // Normal: active=true, inverted=false -> high
        // Inverted: active=true, inverted=true -> low
        let level = active != self.inverted;
        match which {
            Relay::Heat => self.heat.set_state(level),
            Relay::Cool => self.cool.set_state(level),
        }
    }

    fn relay(&self, which: Relay) -> bool {
        let level = match which {
            Relay::Heat => self.heat.is_set_high(),
            Relay::Cool => self.cool.is_set_high(),
        };
        level != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_pair() {
        let mut pair = GpioRelayPair::new_active_high(MockPin::new(true), MockPin::new(true));

        // Construction opens both relays
        assert!(!pair.relay(Relay::Heat));
        assert!(!pair.relay(Relay::Cool));
        assert!(!pair.heat.is_set_high());

        pair.set_relay(Relay::Cool, true);
        assert!(pair.relay(Relay::Cool));
        assert!(pair.cool.is_set_high());
        assert!(pair.is_mismatched());
    }

    #[test]
    fn test_active_low_pair() {
        let mut pair = GpioRelayPair::new(MockPin::new(false), MockPin::new(false), true);

        // Open relays are driven high
        assert!(!pair.relay(Relay::Heat));
        assert!(pair.heat.is_set_high());
        assert!(pair.cool.is_set_high());

        pair.set_relay(Relay::Heat, true);
        assert!(pair.relay(Relay::Heat));
        assert!(!pair.heat.is_set_high());

        let (heat, cool) = pair.into_pins();
        assert!(!heat.is_set_high());
        assert!(cool.is_set_high());
    }
}
