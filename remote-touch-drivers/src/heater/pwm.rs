//! PWM heater output
//!
//! The copper heater is switched by a MOSFET driven from an 8-bit PWM.

use remote_touch_core::traits::HeaterPwm;
use remote_touch_hal::PwmCompare;

/// Heater on a PWM compare channel
pub struct PwmHeater<P> {
    pwm: P,
}

impl<P: PwmCompare> PwmHeater<P> {
    /// Create a new PWM heater, initially off
    pub fn new(pwm: P) -> Self {
        let mut heater = Self { pwm };
        heater.set_duty(0);
        heater
    }

    /// Get access to the PWM channel
    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}

impl<P: PwmCompare> HeaterPwm for PwmHeater<P> {
    fn set_duty(&mut self, duty: u8) {
        // Avoid glitching the output with redundant writes
        if self.pwm.read_compare() != duty {
            self.pwm.write_compare(duty);
        }
    }

    fn duty(&self) -> u8 {
        self.pwm.read_compare()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPwm {
        compare: u8,
        writes: u32,
    }

    impl PwmCompare for MockPwm {
        fn write_compare(&mut self, value: u8) {
            self.compare = value;
            self.writes += 1;
        }

        fn read_compare(&self) -> u8 {
            self.compare
        }
    }

    #[test]
    fn test_starts_off() {
        let heater = PwmHeater::new(MockPwm {
            compare: 200,
            writes: 0,
        });
        assert_eq!(heater.duty(), 0);
        assert!(!heater.is_on());
    }

    #[test]
    fn test_redundant_writes_skipped() {
        let mut heater = PwmHeater::new(MockPwm {
            compare: 0,
            writes: 0,
        });
        heater.set_duty(255);
        heater.set_duty(255);
        heater.set_duty(147);
        assert_eq!(heater.duty(), 147);
        assert_eq!(heater.pwm().writes, 2);
    }
}
