//! RTD resistor divider model
//!
//! Circuit: V_S -- RTD (R_TOP at 0 °C) -- ADC_PIN -- R_BOT -- GND
//!
//! ```text
//! temp = (V_S * R_BOT - v * (R_TOP + R_BOT)) / (v * OHM_PER_C) + offset
//! ```
//!
//! The formula divides by the measured voltage, so a zero (or negative)
//! reading is reported as a sensor fault instead of producing a diverging
//! temperature.

use crate::config::RtdConfig;
use crate::traits::SensorError;

/// Convert a divider voltage to °C using the default divider constants
pub fn voltage_to_celsius(voltage: f32, offset_c: f32) -> Result<f32, SensorError> {
    voltage_to_celsius_with(voltage, &RtdConfig::with_offset(offset_c))
}

/// Convert a divider voltage to °C using an explicit divider model
pub fn voltage_to_celsius_with(voltage: f32, rtd: &RtdConfig) -> Result<f32, SensorError> {
    if !voltage.is_finite() || voltage < 0.0 {
        return Err(SensorError::InvalidVoltage);
    }
    if voltage == 0.0 {
        return Err(SensorError::ZeroVoltage);
    }

    let numerator = rtd.supply_v * rtd.r_bottom_ohms - voltage * (rtd.r_top_ohms + rtd.r_bottom_ohms);
    let temp = numerator / (voltage * rtd.ohm_per_c) + rtd.offset_c;

    if temp.is_finite() {
        Ok(temp)
    } else {
        Err(SensorError::InvalidVoltage)
    }
}

impl RtdConfig {
    /// Convert a divider voltage to °C with this divider
    pub fn voltage_to_celsius(&self, voltage: f32) -> Result<f32, SensorError> {
        voltage_to_celsius_with(voltage, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_known_points() {
        // 4.5 V: (50000 - 49500) / (4.5 * 3.85) = 28.860...
        let temp = voltage_to_celsius(4.5, 32.0).unwrap();
        assert!(close(temp, 500.0 / 17.325 + 32.0));

        // Balance point of the divider reads exactly the offset
        let balance = 5.0 * 10_000.0 / 11_000.0;
        let temp = voltage_to_celsius(balance, 47.0).unwrap();
        assert!((temp - 47.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_voltage_is_fault() {
        assert_eq!(voltage_to_celsius(0.0, 32.0), Err(SensorError::ZeroVoltage));
        assert_eq!(voltage_to_celsius(-0.0, 32.0), Err(SensorError::ZeroVoltage));
    }

    #[test]
    fn test_invalid_voltage_is_fault() {
        assert_eq!(
            voltage_to_celsius(-1.0, 32.0),
            Err(SensorError::InvalidVoltage)
        );
        assert_eq!(
            voltage_to_celsius(f32::NAN, 32.0),
            Err(SensorError::InvalidVoltage)
        );
        assert_eq!(
            voltage_to_celsius(f32::INFINITY, 32.0),
            Err(SensorError::InvalidVoltage)
        );
    }

    #[test]
    fn test_tiny_voltage_overflow_is_fault() {
        // Denormal input makes the quotient overflow to infinity
        let result = voltage_to_celsius(f32::MIN_POSITIVE / 1.0e6, 32.0);
        assert_eq!(result, Err(SensorError::InvalidVoltage));
    }

    #[test]
    fn test_config_method_matches_free_function() {
        let rtd = RtdConfig::with_offset(34.0);
        assert_eq!(rtd.voltage_to_celsius(4.52), voltage_to_celsius(4.52, 34.0));
    }

    proptest! {
        #[test]
        fn prop_conversion_is_pure(v in 0.01f32..5.0, offset in -50.0f32..100.0) {
            let a = voltage_to_celsius(v, offset).unwrap();
            let b = voltage_to_celsius(v, offset).unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }

        #[test]
        fn prop_offset_shifts_result(
            v in 0.5f32..5.0,
            offset in -50.0f32..100.0,
            delta in -20.0f32..20.0,
        ) {
            let base = voltage_to_celsius(v, offset).unwrap();
            let shifted = voltage_to_celsius(v, offset + delta).unwrap();
            prop_assert!(((shifted - base) - delta).abs() < 1e-2);
        }
    }
}
