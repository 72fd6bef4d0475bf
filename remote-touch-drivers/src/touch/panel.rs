//! Touch panel
//!
//! Combines the remote-touch input pin with the capacitive plate scanner.
//! The remote pin is read fresh on every poll. The local touch state only
//! changes when the scanner is idle: then the baselines are updated, the
//! next scan is started and the widget state is latched. The latched state
//! is mirrored to an indicator output.

use remote_touch_core::traits::{TouchInputs, TouchSource};
use remote_touch_hal::{InputPin, OutputPin};

/// Capacitive sensing block scanning the plate electrode
pub trait CapacitiveScanner {
    /// Measure initial baselines (call once, after the warm-up delay)
    fn initialize_baselines(&mut self);

    /// Is a scan still running?
    fn is_busy(&self) -> bool;

    /// Update baselines from the last finished scan
    fn update_baselines(&mut self);

    /// Start scanning all widgets
    fn start_scan(&mut self);

    /// Was the plate widget active in the last finished scan?
    fn is_widget_active(&self) -> bool;
}

/// Remote pin, capacitive scanner and touch indicator
pub struct TouchPanel<RP, S, IND> {
    remote: RP,
    scanner: S,
    indicator: IND,
    local_touch: bool,
}

impl<RP, S, IND> TouchPanel<RP, S, IND>
where
    RP: InputPin,
    S: CapacitiveScanner,
    IND: OutputPin,
{
    /// Create a touch panel
    ///
    /// Initializes the scanner baselines and starts the first scan. The
    /// caller is responsible for the sensor warm-up delay beforehand.
    pub fn new(remote: RP, mut scanner: S, mut indicator: IND) -> Self {
        scanner.initialize_baselines();
        scanner.start_scan();
        indicator.set_low();
        Self {
            remote,
            scanner,
            indicator,
            local_touch: false,
        }
    }

    /// Last latched local touch state
    pub fn local_touch(&self) -> bool {
        self.local_touch
    }

    /// Read the remote-touch pin
    pub fn remote_touch(&self) -> bool {
        self.remote.is_high()
    }
}

impl<RP, S, IND> TouchSource for TouchPanel<RP, S, IND>
where
    RP: InputPin,
    S: CapacitiveScanner,
    IND: OutputPin,
{
    fn poll_touch(&mut self) -> Option<TouchInputs> {
        if !self.scanner.is_busy() {
            self.scanner.update_baselines();
            self.scanner.start_scan();
            self.local_touch = self.scanner.is_widget_active();
            self.indicator.set_state(self.local_touch);
        }

        Some(TouchInputs::new(self.remote_touch(), self.local_touch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInput {
        high: bool,
    }

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    struct MockIndicator {
        high: bool,
    }

    impl OutputPin for MockIndicator {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[derive(Default)]
    struct MockScanner {
        busy: bool,
        active: bool,
        baselines_initialized: bool,
        baseline_updates: u32,
        scans: u32,
    }

    impl CapacitiveScanner for MockScanner {
        fn initialize_baselines(&mut self) {
            self.baselines_initialized = true;
        }

        fn is_busy(&self) -> bool {
            self.busy
        }

        fn update_baselines(&mut self) {
            self.baseline_updates += 1;
        }

        fn start_scan(&mut self) {
            self.scans += 1;
        }

        fn is_widget_active(&self) -> bool {
            self.active
        }
    }

    fn panel(remote: bool) -> TouchPanel<MockInput, MockScanner, MockIndicator> {
        TouchPanel::new(
            MockInput { high: remote },
            MockScanner::default(),
            MockIndicator { high: true },
        )
    }

    #[test]
    fn test_new_starts_first_scan() {
        let panel = panel(false);
        assert!(panel.scanner.baselines_initialized);
        assert_eq!(panel.scanner.scans, 1);
        assert!(!panel.indicator.high);
        assert!(!panel.local_touch());
    }

    #[test]
    fn test_idle_scanner_latches_widget() {
        let mut panel = panel(true);
        panel.scanner.active = true;

        let inputs = panel.poll_touch().unwrap();
        assert_eq!(inputs, TouchInputs::new(true, true));
        assert_eq!(panel.scanner.baseline_updates, 1);
        assert_eq!(panel.scanner.scans, 2);
        assert!(panel.indicator.high);
    }

    #[test]
    fn test_busy_scanner_keeps_previous_local_touch() {
        let mut panel = panel(false);
        panel.scanner.active = true;
        panel.poll_touch();

        panel.scanner.busy = true;
        panel.scanner.active = false;
        let inputs = panel.poll_touch().unwrap();
        assert!(inputs.local_touch);
        assert_eq!(panel.scanner.scans, 2);
        assert!(panel.indicator.high);
    }

    #[test]
    fn test_remote_pin_read_every_poll() {
        let mut panel = panel(false);
        panel.scanner.busy = true;
        assert!(!panel.poll_touch().unwrap().remote_touch);

        panel.remote.high = true;
        assert!(panel.poll_touch().unwrap().remote_touch);
    }
}
