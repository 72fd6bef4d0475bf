//! Build script for remote-touch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml at compile time
///
/// The firmware falls back to defaults when the embedded file does not
/// parse; catching mistakes here keeps a miscalibrated unit off the bench.
fn validate_config() {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        fail(
            "device.toml not found",
            &["The firmware embeds device.toml; create one next to Cargo.toml."],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read device.toml", &[&e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail("Invalid TOML syntax in device.toml", &lines)
        }
    };

    let mut errors = Vec::new();
    validate_root(&config, &mut errors);
    validate_rtd(&config, &mut errors);
    validate_adc(&config, &mut errors);

    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Invalid device configuration", &lines);
    }

    println!("cargo:warning=device.toml validated successfully");
}

/// Print a boxed error and abort the build
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

/// Read a number that may be written as integer or float
fn number(value: &toml::Value) -> Option<f64> {
    match value {
        toml::Value::Float(f) => Some(*f),
        toml::Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

/// Check an optional integer key against an inclusive range
fn check_int(
    table: &toml::Value,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("'{}' must be {}-{}", key, min, max));
        }
        Some(_) => errors.push(format!("'{}' must be an integer", key)),
    }
}

/// Check an optional numeric key is finite and, if asked, positive
fn check_number(
    table: &toml::Value,
    section: &str,
    key: &str,
    positive: bool,
    errors: &mut Vec<String>,
) {
    let Some(value) = table.get(key) else {
        return;
    };
    match number(value) {
        Some(v) if v.is_finite() && (!positive || v > 0.0) => {}
        Some(_) if positive => {
            errors.push(format!("{}'{}' must be a positive number", section, key));
        }
        Some(_) => errors.push(format!("{}'{}' must be finite", section, key)),
        None => errors.push(format!("{}'{}' must be a number", section, key)),
    }
}

/// Validate top-level keys
fn validate_root(config: &toml::Value, errors: &mut Vec<String>) {
    match config.get("mode") {
        None => {}
        Some(toml::Value::String(mode)) if ["control", "tuner"].contains(&mode.as_str()) => {}
        Some(_) => errors.push("'mode' must be \"control\" or \"tuner\"".to_string()),
    }

    check_number(config, "", "target_temp_c", false, errors);
    check_int(config, "min_heater_duty", 0, 255, errors);
    check_int(config, "max_cooling_time_ms", 0, u32::MAX as i64, errors);
    check_int(config, "relay_switch_time_ms", 0, 1000, errors);
    check_int(config, "relay_click_period_ms", 1, u32::MAX as i64, errors);
    check_int(config, "pwm_settle_ms", 0, 1000, errors);
}

/// Validate the [rtd] divider model
fn validate_rtd(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(rtd) = config.get("rtd") else {
        return;
    };
    if !rtd.is_table() {
        errors.push("[rtd] must be a table".to_string());
        return;
    }

    check_number(rtd, "[rtd] ", "offset_c", false, errors);
    for key in ["supply_v", "r_top_ohms", "r_bottom_ohms", "ohm_per_c"] {
        check_number(rtd, "[rtd] ", key, true, errors);
    }
}

/// Validate the [adc] sampler settings
fn validate_adc(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(adc) = config.get("adc") else {
        return;
    };
    if !adc.is_table() {
        errors.push("[adc] must be a table".to_string());
        return;
    }

    for key in ["vref_v", "input_scale"] {
        check_number(adc, "[adc] ", key, true, errors);
    }
}
