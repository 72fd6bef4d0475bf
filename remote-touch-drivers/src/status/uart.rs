//! Status lines over the debug UART

use core::fmt::Write;

use heapless::String;
use remote_touch_core::status::{StatusLine, STATUS_LINE_CAPACITY};
use remote_touch_core::traits::StatusSink;
use remote_touch_hal::UartTx;

/// Writes status lines to a UART transmitter
///
/// Transport errors are swallowed and counted. Telemetry never blocks or
/// alters a control decision.
pub struct UartStatusSink<U> {
    uart: U,
    dropped: u32,
}

impl<U: UartTx> UartStatusSink<U> {
    /// Create a status sink
    pub fn new(uart: U) -> Self {
        Self { uart, dropped: 0 }
    }

    /// Number of lines lost to transmit errors
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Write a raw line (used by the tuner stream)
    pub fn write_line(&mut self, line: &str) {
        let sent = self
            .uart
            .write_str_blocking(line)
            .and_then(|()| self.uart.write_blocking(b"\n"));
        if sent.is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
    }

    /// Write one tuner sample: raw divider voltage and local touch
    pub fn write_tuner_sample(&mut self, volts: f32, local_touch: bool) {
        let mut line: String<STATUS_LINE_CAPACITY> = String::new();
        let _ = write!(line, "V={:.4} touch={}", volts, local_touch as u8);
        self.write_line(&line);
    }

    /// Release the transmitter
    pub fn into_inner(self) -> U {
        self.uart
    }
}

impl<U: UartTx> StatusSink for UartStatusSink<U> {
    fn report_status(&mut self, status: &StatusLine) {
        let line = status.render();
        if self.uart.write_str_blocking(&line).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
    }
}
