//! Mode controller
//!
//! Owns the actuators and all loop state, and runs one decision per tick.

pub mod controller;

pub use controller::{Controller, ControllerState, TickOutcome};
