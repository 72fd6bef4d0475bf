//! Simple TOML parser for the device configuration
//!
//! Handles only the subset `device.toml` needs; `build.rs` has already
//! checked the file with a full TOML parser on the host.
//!
//! Supported features:
//! - Key = value pairs (string, integer, float)
//! - `[rtd]` and `[adc]` section headers
//! - Comments (# ...)

use remote_touch_core::config::{ConfigError, ControlConfig};
use remote_touch_drivers::sensor::RtdSamplerConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown section header
    InvalidSection,
    /// Unknown key in a known section
    UnknownKey,
    /// Value could not be parsed
    InvalidValue,
    /// Values parsed but do not form a usable configuration
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Top-level mode selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Run the thermal control loop
    #[default]
    Control,
    /// Stream raw readings for calibration, outputs held off
    Tuner,
}

/// Everything configurable on one unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceConfig {
    /// Startup mode
    pub mode: OperatingMode,
    /// Control loop constants
    pub control: ControlConfig,
    /// ADC scaling
    pub sampler: RtdSamplerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Root,
    Rtd,
    Adc,
}

/// Parse the device configuration
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    config.control.validate()?;
    if !(positive(config.sampler.vref_v) && positive(config.sampler.input_scale)) {
        return Err(ParseError::InvalidValue);
    }

    Ok(config)
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "rtd" => Ok(Section::Rtd),
        "adc" => Ok(Section::Adc),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Strip inline comments outside of strings
    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_float(value: &str) -> Result<f32, ParseError> {
    let v: f32 = value.parse().map_err(|_| ParseError::InvalidValue)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ParseError::InvalidValue)
    }
}

fn parse_mode(value: &str) -> Result<OperatingMode, ParseError> {
    match parse_string(value) {
        "control" => Ok(OperatingMode::Control),
        "tuner" => Ok(OperatingMode::Tuner),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DeviceConfig,
) -> Result<(), ParseError> {
    let control = &mut config.control;
    match (section, key) {
        (Section::Root, "mode") => config.mode = parse_mode(value)?,
        (Section::Root, "target_temp_c") => control.target_temp_c = parse_float(value)?,
        (Section::Root, "min_heater_duty") => control.min_heater_duty = parse_int(value)?,
        (Section::Root, "max_cooling_time_ms") => {
            control.max_cooling_time_ms = parse_int(value)?
        }
        (Section::Root, "relay_switch_time_ms") => {
            control.relay_switch_time_ms = parse_int(value)?
        }
        (Section::Root, "relay_click_period_ms") => {
            control.relay_click_period_ms = parse_int(value)?
        }
        (Section::Root, "pwm_settle_ms") => control.pwm_settle_ms = parse_int(value)?,

        (Section::Rtd, "offset_c") => control.rtd.offset_c = parse_float(value)?,
        (Section::Rtd, "supply_v") => control.rtd.supply_v = parse_float(value)?,
        (Section::Rtd, "r_top_ohms") => control.rtd.r_top_ohms = parse_float(value)?,
        (Section::Rtd, "r_bottom_ohms") => control.rtd.r_bottom_ohms = parse_float(value)?,
        (Section::Rtd, "ohm_per_c") => control.rtd.ohm_per_c = parse_float(value)?,

        (Section::Adc, "vref_v") => config.sampler.vref_v = parse_float(value)?,
        (Section::Adc, "input_scale") => config.sampler.input_scale = parse_float(value)?,

        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(include_str!("../../device.toml")).unwrap();
        assert_eq!(config.mode, OperatingMode::Control);
        assert_eq!(config.control.min_heater_duty, 147);
        assert_eq!(config.control.rtd.offset_c, 32.0);
    }

    #[test]
    fn test_sections_and_comments() {
        let input = r#"
            mode = "tuner"   # calibrating
            max_cooling_time_ms = 7000

            [rtd]
            offset_c = 47
        "#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.mode, OperatingMode::Tuner);
        assert_eq!(config.control.max_cooling_time_ms, 7000);
        assert_eq!(config.control.rtd.offset_c, 47.0);
        assert_eq!(config.control.target_temp_c, 30.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(parse_config("[heater]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("offset_c = 3"), Err(ParseError::UnknownKey));
        assert_eq!(
            parse_config("min_heater_duty = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("mode = \"boost\""), Err(ParseError::InvalidValue));
        assert_eq!(
            parse_config("relay_click_period_ms = 0"),
            Err(ParseError::Invalid(ConfigError::ZeroClickPeriod))
        );
    }
}
