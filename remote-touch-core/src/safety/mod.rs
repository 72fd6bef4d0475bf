//! Relay safety
//!
//! All relay writes go through the sequencer so that the actuator never
//! receives conflicting polarity through half-switched contacts.

pub mod sequencer;

pub use sequencer::RelaySequencer;
