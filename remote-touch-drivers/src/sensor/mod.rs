//! Temperature sensor implementations

pub mod rtd;

pub use rtd::{RtdSampler, RtdSamplerConfig};
