//! Heater output trait

/// Heater PWM duty output (0-255 scale)
pub trait HeaterPwm {
    /// Command a new duty cycle
    fn set_duty(&mut self, duty: u8);

    /// Duty cycle currently commanded
    fn duty(&self) -> u8;

    /// Check if the heater is driven at all
    fn is_on(&self) -> bool {
        self.duty() != 0
    }
}
