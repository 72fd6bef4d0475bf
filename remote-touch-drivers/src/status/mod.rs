//! Status output implementations

pub mod uart;

pub use uart::UartStatusSink;
