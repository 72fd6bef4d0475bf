//! Board adapters
//!
//! Bridges embassy-rp peripherals to the remote-touch-hal traits and names
//! the concrete driver types used by the tasks.
//!
//! Pin assignments (Raspberry Pi Pico):
//! - GPIO0  debug UART TX
//! - GPIO14 heat relay, GPIO15 cool relay
//! - GPIO16 heater PWM (slice 0, channel A)
//! - GPIO20 remote touch input
//! - GPIO21 touch module output
//! - GPIO25 touch indicator (on-board LED)
//! - GPIO26 RTD divider (ADC0)

use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::uart;
use embassy_time::{Delay, Instant};

use remote_touch_core::traits::TickCounter;
use remote_touch_core::Controller;
use remote_touch_drivers::heater::PwmHeater;
use remote_touch_drivers::relay::GpioRelayPair;
use remote_touch_drivers::sensor::RtdSampler;
use remote_touch_drivers::status::UartStatusSink;
use remote_touch_drivers::touch::{CapacitiveScanner, TouchPanel};
use remote_touch_hal::{
    ConversionAdc, DataBits, InputPin, OutputPin, Parity, PwmCompare, StopBits, UartConfig,
    UartTx,
};

/// Relay pair on two GPIO outputs
pub type BoardRelays = GpioRelayPair<BoardOutput, BoardOutput>;

/// Heater on the PWM slice
pub type BoardHeater = PwmHeater<BoardPwm>;

/// RTD sampler on ADC0
pub type BoardSampler = RtdSampler<BoardAdc>;

/// Remote pin, touch module and indicator LED
pub type BoardTouch = TouchPanel<BoardInput, TouchModule, BoardOutput>;

/// Status lines on the debug UART
pub type BoardStatus = UartStatusSink<BoardUart>;

/// The thermal controller wired to this board
pub type BoardController = Controller<EmbassyCounter, BoardRelays, BoardHeater, Delay>;

/// GPIO output
pub struct BoardOutput(Output<'static>);

impl BoardOutput {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl OutputPin for BoardOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// GPIO input
pub struct BoardInput(Input<'static>);

impl BoardInput {
    pub fn new(pin: Input<'static>) -> Self {
        Self(pin)
    }
}

impl InputPin for BoardInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// 8-bit heater PWM on one slice, channel A
pub struct BoardPwm {
    pwm: Pwm<'static>,
    config: pwm::Config,
}

impl BoardPwm {
    /// Take over a PWM slice and program an 8-bit period, output low
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = pwm::Config::default();
        config.top = u8::MAX as u16;
        config.compare_a = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl PwmCompare for BoardPwm {
    fn write_compare(&mut self, value: u8) {
        self.config.compare_a = value as u16;
        self.pwm.set_config(&self.config);
    }

    fn read_compare(&self) -> u8 {
        self.config.compare_a as u8
    }
}

/// ADC channel in start / poll / read form
///
/// The RP2040 converts in ~2 µs, so the conversion runs inside
/// `read_counts`; starting only arms the next read.
pub struct BoardAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
    armed: bool,
}

impl BoardAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self {
            adc,
            channel,
            armed: false,
        }
    }
}

impl ConversionAdc for BoardAdc {
    type Error = adc::Error;

    fn start_conversion(&mut self) {
        self.armed = true;
    }

    fn is_end_of_conversion(&mut self) -> bool {
        self.armed
    }

    fn read_counts(&mut self) -> Result<u16, Self::Error> {
        self.armed = false;
        self.adc.blocking_read(&mut self.channel)
    }

    fn max_counts(&self) -> u16 {
        4095
    }
}

/// Blocking debug UART transmitter
pub struct BoardUart(uart::UartTx<'static, uart::Blocking>);

impl BoardUart {
    pub fn new(tx: uart::UartTx<'static, uart::Blocking>) -> Self {
        Self(tx)
    }
}

impl UartTx for BoardUart {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.blocking_flush()
    }
}

/// Convert the HAL UART settings to embassy-rp's
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

/// Capacitive touch module with a digital output
///
/// The RP2040 has no capacitive sensing block; the plate electrode feeds
/// a self-calibrating touch module instead. Its output is valid at any
/// time, so a scan is a single pin sample and never busy.
pub struct TouchModule {
    output: Input<'static>,
    active: bool,
}

impl TouchModule {
    pub fn new(output: Input<'static>) -> Self {
        Self {
            output,
            active: false,
        }
    }
}

impl CapacitiveScanner for TouchModule {
    fn initialize_baselines(&mut self) {
        // The module calibrates itself at power-up
    }

    fn is_busy(&self) -> bool {
        false
    }

    fn update_baselines(&mut self) {}

    fn start_scan(&mut self) {
        self.active = self.output.is_high();
    }

    fn is_widget_active(&self) -> bool {
        self.active
    }
}

/// Millisecond counter over the embassy time driver
///
/// Presents uptime as a down-counter over the full `u32` range so the
/// stopwatch sees the same wrap behavior as a hardware timer.
pub struct EmbassyCounter;

impl EmbassyCounter {
    const PERIOD: u32 = u32::MAX;
}

impl TickCounter for EmbassyCounter {
    fn read_counter(&self) -> u32 {
        let ms = Instant::now().as_millis() % Self::PERIOD as u64;
        Self::PERIOD - 1 - ms as u32
    }

    fn period(&self) -> u32 {
        Self::PERIOD
    }
}
