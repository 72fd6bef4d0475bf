//! PWM compare register abstraction
//!
//! The heater is driven by an 8-bit PWM whose compare value is the duty
//! cycle on a 0-255 scale.

/// 8-bit PWM compare register
pub trait PwmCompare {
    /// Write the compare value (0 = off, 255 = full on)
    fn write_compare(&mut self, value: u8);

    /// Read back the compare value currently programmed
    fn read_compare(&self) -> u8;
}
