//! RTD divider sampler
//!
//! Reads the RTD divider through a free-running ADC conversion. Each poll
//! checks for end of conversion, reads the result, converts counts to the
//! divider voltage and restarts the converter. The temperature model itself
//! lives in `remote_touch_core::thermal`.

use remote_touch_core::traits::{SensorError, TemperatureSource};
use remote_touch_hal::ConversionAdc;

/// Sampler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtdSamplerConfig {
    /// ADC reference voltage (V)
    pub vref_v: f32,
    /// Ratio of divider voltage to ADC pin voltage
    ///
    /// The divider runs from 5 V; a 3.3 V ADC sees it through an
    /// attenuator, so this is > 1 there.
    pub input_scale: f32,
}

impl Default for RtdSamplerConfig {
    fn default() -> Self {
        Self {
            vref_v: 3.3,
            input_scale: 5.0 / 3.3,
        }
    }
}

/// RTD divider sampler on a conversion ADC
pub struct RtdSampler<A> {
    adc: A,
    config: RtdSamplerConfig,
    /// Raw counts of the last finished conversion
    last_counts: Option<u16>,
}

impl<A: ConversionAdc> RtdSampler<A> {
    /// Create a sampler and start the first conversion
    pub fn new(mut adc: A, config: RtdSamplerConfig) -> Self {
        adc.start_conversion();
        Self {
            adc,
            config,
            last_counts: None,
        }
    }

    /// Raw counts of the last finished conversion
    pub fn last_counts(&self) -> Option<u16> {
        self.last_counts
    }

    /// Convert ADC counts to the divider voltage
    pub fn counts_to_volts(&self, counts: u16) -> f32 {
        let max = self.adc.max_counts().max(1) as f32;
        counts as f32 / max * self.config.vref_v * self.config.input_scale
    }
}

impl<A: ConversionAdc> TemperatureSource for RtdSampler<A> {
    fn poll_voltage(&mut self) -> Option<Result<f32, SensorError>> {
        if !self.adc.is_end_of_conversion() {
            return None;
        }

        let result = self.adc.read_counts();
        // Free-running: always queue the next conversion
        self.adc.start_conversion();

        match result {
            Ok(counts) => {
                self.last_counts = Some(counts);
                Some(Ok(self.counts_to_volts(counts)))
            }
            Err(_) => Some(Err(SensorError::ConversionError)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAdc {
        counts: Result<u16, ()>,
        ready: bool,
        starts: u32,
    }

    impl MockAdc {
        fn new(counts: Result<u16, ()>) -> Self {
            Self {
                counts,
                ready: false,
                starts: 0,
            }
        }
    }

    impl ConversionAdc for MockAdc {
        type Error = ();

        fn start_conversion(&mut self) {
            self.starts += 1;
        }

        fn is_end_of_conversion(&mut self) -> bool {
            self.ready
        }

        fn read_counts(&mut self) -> Result<u16, ()> {
            self.ready = false;
            self.counts
        }

        fn max_counts(&self) -> u16 {
            4095
        }
    }

    fn unity() -> RtdSamplerConfig {
        RtdSamplerConfig {
            vref_v: 5.0,
            input_scale: 1.0,
        }
    }

    #[test]
    fn test_busy_conversion_returns_none() {
        let mut sampler = RtdSampler::new(MockAdc::new(Ok(2048)), unity());
        assert_eq!(sampler.adc.starts, 1);
        assert!(sampler.poll_voltage().is_none());
        assert!(sampler.last_counts().is_none());
    }

    #[test]
    fn test_finished_conversion_is_read_and_restarted() {
        let mut sampler = RtdSampler::new(MockAdc::new(Ok(4095)), unity());
        sampler.adc.ready = true;

        let volts = sampler.poll_voltage().unwrap().unwrap();
        assert!((volts - 5.0).abs() < 1e-4);
        assert_eq!(sampler.adc.starts, 2);
        assert_eq!(sampler.last_counts(), Some(4095));

        // Nothing new until the next conversion ends
        assert!(sampler.poll_voltage().is_none());
    }

    #[test]
    fn test_scaled_input() {
        let sampler = RtdSampler::new(MockAdc::new(Ok(0)), RtdSamplerConfig::default());
        // Full scale on a 3.3 V ADC behind the attenuator is the 5 V rail
        assert!((sampler.counts_to_volts(4095) - 5.0).abs() < 1e-3);
        assert_eq!(sampler.counts_to_volts(0), 0.0);
    }

    #[test]
    fn test_conversion_error() {
        let mut sampler = RtdSampler::new(MockAdc::new(Err(())), unity());
        sampler.adc.ready = true;
        assert_eq!(
            sampler.poll_voltage(),
            Some(Err(SensorError::ConversionError))
        );
        assert_eq!(sampler.adc.starts, 2);
    }
}
