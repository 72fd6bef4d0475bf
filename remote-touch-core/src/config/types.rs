//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RTD supply voltage (V)
pub const DEFAULT_SUPPLY_V: f32 = 5.0;

/// RTD resistance at 0 °C, top leg of the divider (Ω)
pub const DEFAULT_R_TOP_OHMS: f32 = 1000.0;

/// Fixed bottom leg of the divider (Ω)
pub const DEFAULT_R_BOTTOM_OHMS: f32 = 10000.0;

/// RTD slope (Ω per °C)
pub const DEFAULT_OHM_PER_C: f32 = 3.85;

/// Calibration offset of the reference unit (°C)
///
/// Deployed frames have needed 30, 32, 34 and 47.
pub const DEFAULT_OFFSET_C: f32 = 32.0;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Divider constants must be finite and positive
    InvalidDivider,
    /// Calibration offset must be finite
    InvalidOffset,
    /// Target temperature must be finite
    InvalidTarget,
    /// Click period must be non-zero
    ZeroClickPeriod,
}

/// RTD resistor divider model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RtdConfig {
    /// Divider supply voltage (V)
    pub supply_v: f32,
    /// RTD nominal resistance at 0 °C (Ω)
    pub r_top_ohms: f32,
    /// Fixed resistor (Ω)
    pub r_bottom_ohms: f32,
    /// RTD slope (Ω/°C)
    pub ohm_per_c: f32,
    /// Per-unit calibration offset (°C)
    pub offset_c: f32,
}

impl Default for RtdConfig {
    fn default() -> Self {
        Self {
            supply_v: DEFAULT_SUPPLY_V,
            r_top_ohms: DEFAULT_R_TOP_OHMS,
            r_bottom_ohms: DEFAULT_R_BOTTOM_OHMS,
            ohm_per_c: DEFAULT_OHM_PER_C,
            offset_c: DEFAULT_OFFSET_C,
        }
    }
}

impl RtdConfig {
    /// Default divider with a unit-specific offset
    pub fn with_offset(offset_c: f32) -> Self {
        Self {
            offset_c,
            ..Self::default()
        }
    }

    /// Check the divider constants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.supply_v)
            && positive(self.r_top_ohms)
            && positive(self.r_bottom_ohms)
            && positive(self.ohm_per_c))
        {
            return Err(ConfigError::InvalidDivider);
        }
        if !self.offset_c.is_finite() {
            return Err(ConfigError::InvalidOffset);
        }
        Ok(())
    }
}

/// Control loop configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlConfig {
    /// Below this temperature the heater runs at full duty (°C)
    pub target_temp_c: f32,
    /// Holding duty at or above target (0-255)
    ///
    /// Empirically low enough to idle for ~5 min before the plate gets too hot.
    pub min_heater_duty: u8,
    /// Cooling window after the last heating tick (ms)
    pub max_cooling_time_ms: u32,
    /// Worst-case relay switching time (ms)
    pub relay_switch_time_ms: u32,
    /// Interval between audible relay clicks (ms)
    pub relay_click_period_ms: u32,
    /// Settle time after forcing the PWM to zero (ms)
    pub pwm_settle_ms: u32,
    /// RTD divider model
    pub rtd: RtdConfig,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            target_temp_c: 30.0,
            min_heater_duty: 147,
            max_cooling_time_ms: 60_000,
            relay_switch_time_ms: 5,
            relay_click_period_ms: 1000,
            pwm_settle_ms: 1,
            rtd: RtdConfig::default(),
        }
    }
}

impl ControlConfig {
    /// Short 7 s cooling window of the first hardware revision
    pub fn legacy_two_state() -> Self {
        Self {
            max_cooling_time_ms: 7_000,
            ..Self::default()
        }
    }

    /// Check the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_temp_c.is_finite() {
            return Err(ConfigError::InvalidTarget);
        }
        if self.relay_click_period_ms == 0 {
            return Err(ConfigError::ZeroClickPeriod);
        }
        self.rtd.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ControlConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_heater_duty, 147);
        assert_eq!(config.max_cooling_time_ms, 60_000);
        assert_eq!(config.relay_switch_time_ms, 5);
        assert_eq!(config.relay_click_period_ms, 1000);
    }

    #[test]
    fn test_legacy_budget() {
        let config = ControlConfig::legacy_two_state();
        assert_eq!(config.max_cooling_time_ms, 7_000);
        assert_eq!(config.target_temp_c, ControlConfig::default().target_temp_c);
    }

    #[test]
    fn test_zero_click_period_rejected() {
        let config = ControlConfig {
            relay_click_period_ms: 0,
            ..ControlConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroClickPeriod));
    }

    #[test]
    fn test_divider_validation() {
        let mut rtd = RtdConfig::with_offset(47.0);
        assert_eq!(rtd.validate(), Ok(()));

        rtd.ohm_per_c = 0.0;
        assert_eq!(rtd.validate(), Err(ConfigError::InvalidDivider));

        let rtd = RtdConfig::with_offset(f32::NAN);
        assert_eq!(rtd.validate(), Err(ConfigError::InvalidOffset));
    }
}
