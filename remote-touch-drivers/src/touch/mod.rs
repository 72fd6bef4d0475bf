//! Touch input implementations

pub mod panel;

pub use panel::{CapacitiveScanner, TouchPanel};
