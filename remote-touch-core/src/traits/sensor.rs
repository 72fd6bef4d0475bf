//! Temperature sensing trait

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No conversion has completed since boot
    NotReady,
    /// Divider voltage read as zero (open RTD or dead ADC)
    ZeroVoltage,
    /// Negative or non-finite voltage, or a non-finite temperature
    InvalidVoltage,
    /// ADC conversion failed
    ConversionError,
}

/// Source of RTD divider voltage samples
///
/// Models the `poll_ready() / read()` capability of a free-running ADC:
/// returns the newest finished conversion and restarts the converter, or
/// `None` while the conversion is still in flight.
pub trait TemperatureSource {
    /// Poll for a new divider voltage (volts)
    fn poll_voltage(&mut self) -> Option<Result<f32, SensorError>>;
}
