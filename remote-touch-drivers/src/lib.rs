//! Driver implementations
//!
//! This crate implements the collaborator traits of remote-touch-core on
//! top of the pin-level traits of remote-touch-hal:
//!
//! - Relay pair (two GPIO outputs)
//! - Heater (8-bit PWM compare)
//! - RTD sampler (free-running ADC conversion)
//! - Touch panel (remote pin, capacitive scanner, indicator pin)
//! - Status sink (debug UART)

#![no_std]
#![deny(unsafe_code)]

pub mod heater;
pub mod relay;
pub mod sensor;
pub mod status;
pub mod touch;
