//! Collaborator traits
//!
//! These traits define the interface between the control core and the
//! platform adapters. The core never touches registers directly.

pub mod counter;
pub mod heater;
pub mod relay;
pub mod sensor;
pub mod status;
pub mod touch;

pub use counter::TickCounter;
pub use heater::HeaterPwm;
pub use relay::{Relay, RelayOutputs};
pub use sensor::{SensorError, TemperatureSource};
pub use status::StatusSink;
pub use touch::{TouchInputs, TouchSource};
