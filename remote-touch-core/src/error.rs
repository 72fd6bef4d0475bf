//! Control loop error taxonomy
//!
//! None of these stop the loop. Each one maps to a safe output or to
//! "try again next tick".

use crate::traits::SensorError;

/// Errors observed by the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// Temperature reading is unusable (zero or invalid voltage)
    SensorFault(SensorError),
    /// Relays were found in mismatched states before a transition
    ///
    /// Corrected on the spot by the relay sequencer.
    RelayMismatch,
    /// A peripheral has no new data yet; reuse the last value
    PeripheralBusy,
}

impl ControlError {
    /// Whether the condition only means "not ready yet"
    pub fn is_transient(&self) -> bool {
        matches!(self, ControlError::PeripheralBusy)
    }
}

impl From<SensorError> for ControlError {
    fn from(e: SensorError) -> Self {
        ControlError::SensorFault(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_error_converts() {
        let err: ControlError = SensorError::ZeroVoltage.into();
        assert_eq!(err, ControlError::SensorFault(SensorError::ZeroVoltage));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_busy_is_transient() {
        assert!(ControlError::PeripheralBusy.is_transient());
        assert!(!ControlError::RelayMismatch.is_transient());
    }
}
