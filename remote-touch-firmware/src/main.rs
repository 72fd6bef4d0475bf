//! Remote Touch - Thermal Plate Firmware
//!
//! Main firmware binary for the RP2040-based plate controller. A remote
//! operator's "touch" heats the plate; releasing it cools the plate for a
//! bounded window. A local capacitive touch silences the relay click.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_rp::uart;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use remote_touch_core::Controller;
use remote_touch_drivers::heater::PwmHeater;
use remote_touch_drivers::relay::GpioRelayPair;
use remote_touch_drivers::sensor::RtdSampler;
use remote_touch_drivers::status::UartStatusSink;
use remote_touch_drivers::touch::TouchPanel;
use remote_touch_hal::UartConfig;

use crate::board::{
    BoardAdc, BoardInput, BoardOutput, BoardPwm, BoardUart, EmbassyCounter, TouchModule,
};
use crate::config::{parse_config, DeviceConfig, OperatingMode};

mod board;
mod config;
mod tasks;

/// Embedded per-unit configuration (compiled into firmware)
/// Edit device.toml and rebuild to recalibrate
const DEVICE_CONFIG: &str = include_str!("../device.toml");

/// Touch sensor power-up settling time before baselines are taken
const TOUCH_WARMUP_MS: u64 = 2000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Remote touch firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Outputs first, all inactive
    let relays = GpioRelayPair::new_active_high(
        BoardOutput::new(Output::new(p.PIN_14, Level::Low)),
        BoardOutput::new(Output::new(p.PIN_15, Level::Low)),
    );
    let heater = PwmHeater::new(BoardPwm::new(Pwm::new_output_a(
        p.PWM_SLICE0,
        p.PIN_16,
        Default::default(),
    )));
    info!("Outputs initialized (heater off, relays open)");

    let device = load_config();

    let tx = uart::UartTx::new_blocking(
        p.UART0,
        p.PIN_0,
        board::uart_config(&UartConfig::default()),
    );
    let status = UartStatusSink::new(BoardUart::new(tx));

    let adc = Adc::new_blocking(p.ADC, Default::default());
    let rtd_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sampler = RtdSampler::new(BoardAdc::new(adc, rtd_channel), device.sampler);

    info!("Waiting {} ms for the touch sensor", TOUCH_WARMUP_MS);
    Timer::after_millis(TOUCH_WARMUP_MS).await;

    let touch = TouchPanel::new(
        BoardInput::new(Input::new(p.PIN_20, Pull::Down)),
        TouchModule::new(Input::new(p.PIN_21, Pull::Down)),
        BoardOutput::new(Output::new(p.PIN_25, Level::Low)),
    );
    info!("Touch panel initialized");

    match device.mode {
        OperatingMode::Control => {
            let controller =
                Controller::new(device.control, EmbassyCounter, relays, heater, Delay);
            spawner
                .spawn(tasks::control_task(controller, sampler, touch, status))
                .unwrap();
        }
        OperatingMode::Tuner => {
            spawner
                .spawn(tasks::tuner_task(relays, heater, sampler, touch, status))
                .unwrap();
        }
    }
}

/// Parse the embedded configuration, falling back to defaults
fn load_config() -> DeviceConfig {
    match parse_config(DEVICE_CONFIG) {
        Ok(device) => {
            info!(
                "Configuration loaded: mode={}, offset={}°C",
                device.mode, device.control.rtd.offset_c
            );
            device
        }
        Err(e) => {
            error!("Invalid device.toml ({}), using defaults", e);
            DeviceConfig::default()
        }
    }
}
