//! Thermal mode controller
//!
//! Each tick:
//! 1. Take the newest temperature and touch samples (if any are ready)
//! 2. Remote touch: match the relays, click, drive the heater at max duty
//!    below target and at the holding duty otherwise, restart the cooling
//!    window
//! 3. No remote touch: heater off, heat relay out, then cool until the
//!    window closes and idle afterwards
//!
//! The cooling window is only restarted by heating. Once it closes the
//! plate stays idle until the next heating phase.

use embedded_hal::delay::DelayNs;

use crate::config::ControlConfig;
use crate::error::ControlError;
use crate::feedback::Clicker;
use crate::safety::RelaySequencer;
use crate::state::{ModeInputs, ThermalMode};
use crate::status::StatusLine;
use crate::time::{ElapsedTimer, Stopwatch};
use crate::traits::{
    HeaterPwm, Relay, RelayOutputs, SensorError, TemperatureSource, TickCounter, TouchInputs,
    TouchSource,
};

/// Full heater duty
pub const MAX_DUTY: u8 = u8::MAX;

/// Loop state carried between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    /// Current mode
    pub mode: ThermalMode,
    /// Last good temperature (°C)
    pub temperature_c: f32,
    /// Fault from the latest temperature sample, if any
    pub sensor_fault: Option<SensorError>,
    /// Latest touch inputs
    pub touch: TouchInputs,
    /// Start of the cooling window; `None` once the window has closed
    pub cooling_mark: Option<ElapsedTimer>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            mode: ThermalMode::Idle,
            temperature_c: 0.0,
            sensor_fault: Some(SensorError::NotReady),
            touch: TouchInputs::default(),
            cooling_mark: None,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Mode before the tick
    pub previous: ThermalMode,
    /// Mode after the tick
    pub mode: ThermalMode,
    /// Heater duty commanded
    pub duty: u8,
    /// Relays were found mismatched and forced off
    pub relay_mismatch: bool,
    /// Relays were clicked
    pub clicked: bool,
    /// Heating was refused because of a sensor fault
    pub sensor_fault: Option<SensorError>,
}

impl TickOutcome {
    /// Check if the mode changed
    pub fn mode_changed(&self) -> bool {
        self.previous != self.mode
    }
}

/// Thermal controller
///
/// Owns the relay pair, the heater PWM and the busy-wait delay used for
/// settle times. All relay writes go through the [`RelaySequencer`].
pub struct Controller<C, R, P, D> {
    config: ControlConfig,
    stopwatch: Stopwatch<C>,
    relays: R,
    heater: P,
    delay: D,
    sequencer: RelaySequencer,
    clicker: Clicker,
    state: ControllerState,
}

impl<C, R, P, D> Controller<C, R, P, D>
where
    C: TickCounter,
    R: RelayOutputs,
    P: HeaterPwm,
    D: DelayNs,
{
    /// Create a controller and drive all outputs to the safe state
    pub fn new(config: ControlConfig, counter: C, relays: R, heater: P, delay: D) -> Self {
        let mut controller = Self {
            sequencer: RelaySequencer::new(config.relay_switch_time_ms),
            clicker: Clicker::new(config.relay_click_period_ms),
            config,
            stopwatch: Stopwatch::new(counter),
            relays,
            heater,
            delay,
            state: ControllerState::default(),
        };
        controller.fail_safe();
        controller
    }

    /// Get the configuration
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Get the loop state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Current mode
    pub fn mode(&self) -> ThermalMode {
        self.state.mode
    }

    /// Get access to the relay pair
    pub fn relays(&self) -> &R {
        &self.relays
    }

    /// Get access to the heater output
    pub fn heater(&self) -> &P {
        &self.heater
    }

    /// Get access to the stopwatch
    pub fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }

    /// Number of relay mismatches corrected since boot
    pub fn relay_corrections(&self) -> u32 {
        self.sequencer.mismatch_count()
    }

    /// Snapshot for the status reporter
    pub fn status(&self) -> StatusLine {
        StatusLine {
            mode: self.state.mode,
            duty: self.heater.duty(),
            temperature_c: self.state.temperature_c,
            sensor_fault: self.state.sensor_fault.is_some(),
        }
    }

    /// Poll the collaborators and run one control step
    pub fn tick<T: TemperatureSource, S: TouchSource>(
        &mut self,
        temperature: &mut T,
        touch: &mut S,
    ) -> TickOutcome {
        match temperature.poll_voltage() {
            Some(Ok(voltage)) => {
                // A bad voltage is latched in the state and handled by the step
                let _ = self.ingest_voltage(voltage);
            }
            Some(Err(fault)) => self.ingest_fault(fault),
            None => {}
        }
        if let Some(inputs) = touch.poll_touch() {
            self.state.touch = inputs;
        }
        self.step()
    }

    /// Record a new divider voltage
    ///
    /// On failure the last good temperature is kept for reporting, but
    /// heating is refused until a good sample arrives.
    pub fn ingest_voltage(&mut self, voltage: f32) -> Result<f32, SensorError> {
        match self.config.rtd.voltage_to_celsius(voltage) {
            Ok(temp) => {
                self.state.temperature_c = temp;
                self.state.sensor_fault = None;
                Ok(temp)
            }
            Err(e) => {
                self.state.sensor_fault = Some(e);
                Err(e)
            }
        }
    }

    /// Record a sensor fault reported by the sampler itself
    pub fn ingest_fault(&mut self, fault: SensorError) {
        self.state.sensor_fault = Some(fault);
    }

    /// Replace the touch inputs
    pub fn set_touch(&mut self, touch: TouchInputs) {
        self.state.touch = touch;
    }

    /// Run one control step on the current inputs
    pub fn step(&mut self) -> TickOutcome {
        let previous = self.state.mode;
        let mut outcome = TickOutcome {
            previous,
            mode: previous,
            duty: self.heater.duty(),
            relay_mismatch: false,
            clicked: false,
            sensor_fault: None,
        };

        let mode = ThermalMode::next(ModeInputs {
            remote_touch: self.state.touch.remote_touch,
            sensor_ok: self.state.sensor_fault.is_none(),
            cooling_window_open: self.cooling_window_open(),
        });

        if self.state.touch.remote_touch {
            match mode {
                ThermalMode::Heat => self.heat(&mut outcome),
                _ => {
                    outcome.sensor_fault = self.state.sensor_fault;
                    self.fail_safe();
                }
            }
        } else {
            self.cool_or_idle(mode);
        }

        self.state.mode = mode;
        outcome.mode = mode;
        outcome.duty = self.heater.duty();
        outcome
    }

    /// Check if the cooling window since the last heating tick is open
    ///
    /// The window is dropped as soon as it closes, so an idle plate never
    /// sees the counter alias back into range.
    fn cooling_window_open(&mut self) -> bool {
        let mark = self.state.cooling_mark;
        match mark {
            Some(mark) if self.stopwatch.elapsed_ms(mark) < self.config.max_cooling_time_ms => {
                true
            }
            Some(_) => {
                self.state.cooling_mark = None;
                false
            }
            None => false,
        }
    }

    fn heat(&mut self, outcome: &mut TickOutcome) {
        if self.left_cooling() {
            // Cool-only is what the last cooling tick left: open it, no fault
            self.sequencer
                .release_all(&mut self.relays, &mut self.delay);
        } else if let Err(ControlError::RelayMismatch) =
            self.sequencer.ensure_matched(&mut self.relays, &mut self.delay)
        {
            outcome.relay_mismatch = true;
        }

        outcome.clicked = self.clicker.maybe_click(
            self.state.touch.local_touch,
            &mut self.relays,
            &self.stopwatch,
        );

        let duty = if self.state.temperature_c < self.config.target_temp_c {
            MAX_DUTY
        } else {
            self.config.min_heater_duty
        };
        self.heater.set_duty(duty);

        self.state.cooling_mark = Some(self.stopwatch.start());
    }

    /// Was the last tick a cooling tick that left the pair cool-only?
    fn left_cooling(&self) -> bool {
        self.state.mode == ThermalMode::Cool
            && self.relays.relay(Relay::Cool)
            && !self.relays.relay(Relay::Heat)
    }

    fn cool_or_idle(&mut self, mode: ThermalMode) {
        self.heater_off();
        self.sequencer
            .release_heat(&mut self.relays, &mut self.delay);

        if mode.cooling() {
            self.sequencer
                .engage_cool(&mut self.relays, &mut self.delay);
        } else {
            self.sequencer.release_cool(&mut self.relays);
        }
    }

    fn heater_off(&mut self) {
        if self.heater.is_on() {
            self.heater.set_duty(0);
            self.delay.delay_ms(self.config.pwm_settle_ms);
        }
    }

    /// Heater off, both relays off
    fn fail_safe(&mut self) {
        self.heater_off();
        self.sequencer
            .release_all(&mut self.relays, &mut self.delay);
    }
}
