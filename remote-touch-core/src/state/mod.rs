//! Thermal mode state machine
//!
//! The mode is a pure function of the inputs sampled at the top of each
//! loop iteration; the controller applies the matching outputs.

pub mod machine;

pub use machine::{describe, ModeInputs, ThermalMode};
