//! ADC conversion abstractions
//!
//! The temperature sensor is sampled by a free-running conversion: the
//! caller starts a conversion, polls for its end on later loop iterations,
//! reads the result and starts the next one. Nothing here blocks.

/// ADC channel with start / poll / read conversion control
pub trait ConversionAdc {
    /// Error type for read operations
    type Error;

    /// Start a new conversion
    fn start_conversion(&mut self);

    /// Check whether the last started conversion has finished
    fn is_end_of_conversion(&mut self) -> bool;

    /// Read the finished conversion result in raw counts
    fn read_counts(&mut self) -> Result<u16, Self::Error>;

    /// Full-scale count of the converter (4095 for a 12-bit ADC)
    fn max_counts(&self) -> u16;
}
