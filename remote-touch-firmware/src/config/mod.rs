//! Device configuration
//!
//! The per-unit configuration is compiled in from `device.toml` and parsed
//! at boot by a small no_std parser.

pub mod toml;

pub use toml::{parse_config, DeviceConfig, OperatingMode, ParseError};
