//! Thermal mode definition

/// Plate operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermalMode {
    /// Heater and Peltier off
    #[default]
    Idle,
    /// Heater driven, Peltier relays matched (clicking)
    Heat,
    /// Peltier driven in cooling polarity within the cooling window
    Cool,
}

/// Inputs deciding the next mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeInputs {
    /// Remote operator asks for heat
    pub remote_touch: bool,
    /// Latest temperature reading is usable
    pub sensor_ok: bool,
    /// The cooling window since the last heating tick is still open
    pub cooling_window_open: bool,
}

impl ThermalMode {
    /// Decide the mode for this tick
    ///
    /// The previous mode does not matter: remote touch always wins, and the
    /// cooling window alone decides between cooling and idling.
    pub fn next(inputs: ModeInputs) -> Self {
        match inputs {
            ModeInputs {
                remote_touch: true,
                sensor_ok: true,
                ..
            } => ThermalMode::Heat,
            // Never heat blind
            ModeInputs {
                remote_touch: true,
                sensor_ok: false,
                ..
            } => ThermalMode::Idle,
            ModeInputs {
                remote_touch: false,
                cooling_window_open: true,
                ..
            } => ThermalMode::Cool,
            ModeInputs {
                remote_touch: false,
                cooling_window_open: false,
                ..
            } => ThermalMode::Idle,
        }
    }

    /// Check if this mode drives the heater
    pub fn heater_allowed(&self) -> bool {
        matches!(self, ThermalMode::Heat)
    }

    /// Check if this mode drives the Peltier in cooling polarity
    pub fn cooling(&self) -> bool {
        matches!(self, ThermalMode::Cool)
    }

    /// Human-readable label used in the status line
    pub fn describe(self) -> &'static str {
        describe(self)
    }
}

/// Human-readable label for a mode
pub fn describe(mode: ThermalMode) -> &'static str {
    match mode {
        ThermalMode::Idle => "idle...",
        ThermalMode::Heat => "heating",
        ThermalMode::Cool => "cooling",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(remote_touch: bool, sensor_ok: bool, cooling_window_open: bool) -> ModeInputs {
        ModeInputs {
            remote_touch,
            sensor_ok,
            cooling_window_open,
        }
    }

    #[test]
    fn test_remote_touch_heats() {
        assert_eq!(ThermalMode::next(inputs(true, true, true)), ThermalMode::Heat);
        assert_eq!(ThermalMode::next(inputs(true, true, false)), ThermalMode::Heat);
    }

    #[test]
    fn test_sensor_fault_blocks_heat() {
        assert_eq!(ThermalMode::next(inputs(true, false, true)), ThermalMode::Idle);
        assert_eq!(ThermalMode::next(inputs(true, false, false)), ThermalMode::Idle);
    }

    #[test]
    fn test_cooling_window() {
        assert_eq!(ThermalMode::next(inputs(false, true, true)), ThermalMode::Cool);
        assert_eq!(ThermalMode::next(inputs(false, true, false)), ThermalMode::Idle);
        // Cooling does not depend on the sensor
        assert_eq!(ThermalMode::next(inputs(false, false, true)), ThermalMode::Cool);
    }

    #[test]
    fn test_describe_labels() {
        assert_eq!(describe(ThermalMode::Idle), "idle...");
        assert_eq!(describe(ThermalMode::Heat), "heating");
        assert_eq!(ThermalMode::Cool.describe(), "cooling");
    }

    #[test]
    fn test_mode_predicates() {
        assert!(ThermalMode::Heat.heater_allowed());
        assert!(!ThermalMode::Cool.heater_allowed());
        assert!(!ThermalMode::Idle.heater_allowed());
        assert!(ThermalMode::Cool.cooling());
        assert!(!ThermalMode::Heat.cooling());
    }
}
