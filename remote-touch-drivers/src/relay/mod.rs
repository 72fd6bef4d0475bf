//! Relay pair implementations

pub mod gpio;

pub use gpio::GpioRelayPair;
