//! Audible touch feedback

pub mod clicker;

pub use clicker::Clicker;
