//! Configuration types
//!
//! Every tuning constant of the control loop lives here so that per-unit
//! calibration never needs a code change.

pub mod types;

pub use types::*;
