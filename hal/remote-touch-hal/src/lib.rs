//! Remote Touch Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits the plate drivers are written
//! against. A board crate implements them over its chip HAL (the firmware
//! crate does so for the RP2040 through embassy-rp), so the drivers and the
//! control core never touch registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  remote-touch-firmware (board wiring)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  remote-touch-drivers                   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  remote-touch-hal (this crate - traits) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O (relays, remote touch, indicator)
//! - [`adc::ConversionAdc`] - Free-running ADC conversion with end-of-conversion polling
//! - [`pwm::PwmCompare`] - 8-bit PWM compare register (heater duty)
//! - [`uart::UartTx`] - Serial transmit for the debug telemetry line

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::ConversionAdc;
pub use gpio::{InputPin, OutputPin};
pub use pwm::PwmCompare;
pub use uart::{DataBits, Parity, StopBits, UartConfig, UartTx};
