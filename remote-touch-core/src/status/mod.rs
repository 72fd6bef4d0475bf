//! Status reporting
//!
//! Formats the controller state for the debug UART. Emission is delegated
//! to a [`crate::traits::StatusSink`].

pub mod line;

pub use line::{StatusLine, STATUS_LINE_CAPACITY};
