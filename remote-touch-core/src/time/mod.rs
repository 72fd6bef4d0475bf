//! Elapsed-time measurement over the hardware tick counter

pub mod stopwatch;

pub use stopwatch::{elapsed_between, ElapsedTimer, Stopwatch};
