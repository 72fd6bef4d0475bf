//! Board-agnostic control core for the remote touch plate
//!
//! The plate is heated when a remote operator asserts the touch signal and
//! cooled for a bounded window afterwards. Everything here is free of
//! hardware specifics:
//!
//! - Collaborator traits (relays, heater PWM, counter, sensors, telemetry)
//! - Stopwatch over a wrapping millisecond counter
//! - RTD voltage to temperature conversion
//! - Relay safety sequencing and the audible click feedback
//! - The IDLE / HEAT / COOL mode controller
//! - Status line formatting
//! - Configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod error;
pub mod feedback;
pub mod safety;
pub mod state;
pub mod status;
pub mod thermal;
pub mod time;
pub mod traits;

pub use control::{Controller, ControllerState, TickOutcome};
pub use error::ControlError;
pub use state::ThermalMode;
