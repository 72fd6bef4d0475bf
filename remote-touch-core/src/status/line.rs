//! Status line formatting

use core::fmt::{self, Write};

use heapless::String;

use crate::state::{describe, ThermalMode};

/// Capacity of a rendered status line
pub const STATUS_LINE_CAPACITY: usize = 64;

/// Snapshot of the controller for telemetry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLine {
    /// Current mode
    pub mode: ThermalMode,
    /// Commanded heater duty (0-255)
    pub duty: u8,
    /// Last good temperature (°C)
    pub temperature_c: f32,
    /// Latest reading was a sensor fault
    pub sensor_fault: bool,
}

impl StatusLine {
    /// Render as a newline-terminated line
    pub fn render(&self) -> String<STATUS_LINE_CAPACITY> {
        let mut out = String::new();
        // Worst case is well under the capacity; a truncated line is still sent
        let _ = writeln!(out, "{}", self);
        out
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} duty={}", describe(self.mode), self.duty)?;
        if self.sensor_fault {
            write!(f, " RTD fault")
        } else {
            write!(f, " RTD {:.2}", self.temperature_c)
        }
    }
}
