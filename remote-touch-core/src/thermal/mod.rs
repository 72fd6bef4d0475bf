//! Temperature conversion

pub mod rtd;

pub use rtd::{voltage_to_celsius, voltage_to_celsius_with};
