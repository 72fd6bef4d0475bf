//! Embassy async tasks
//!
//! Exactly one of these runs, chosen at startup from `device.toml`.

pub mod control;
pub mod tuner;

pub use control::control_task;
pub use tuner::tuner_task;
