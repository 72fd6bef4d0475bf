//! Thermal actuator relay pair
//!
//! The two relays select the polarity of the Peltier element. With both
//! relays in the same state the element sees no drive; with exactly one
//! active it heats or cools. Only [`crate::safety::RelaySequencer`] should
//! write to an implementation of [`RelayOutputs`].

/// One of the two actuator relays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Relay {
    /// Heat-polarity relay
    Heat,
    /// Cool-polarity relay
    Cool,
}

/// Digital relay outputs with read-back
pub trait RelayOutputs {
    /// Drive one relay
    fn set_relay(&mut self, which: Relay, active: bool);

    /// Read back the commanded state of one relay
    fn relay(&self, which: Relay) -> bool;

    /// Check if the relays are in different states
    fn is_mismatched(&self) -> bool {
        self.relay(Relay::Heat) != self.relay(Relay::Cool)
    }
}
