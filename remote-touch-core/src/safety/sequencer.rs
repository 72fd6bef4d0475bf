//! Relay safety sequencer
//!
//! The heat and cool relays select the Peltier polarity. Moving from one
//! asymmetric state (exactly one relay active) to anything else always
//! passes through both-off, held for the relay switch time, so the
//! contacts have fully opened before the next command.

use embedded_hal::delay::DelayNs;

use crate::error::ControlError;
use crate::traits::{Relay, RelayOutputs};

/// Relay transition sequencer
#[derive(Debug, Clone)]
pub struct RelaySequencer {
    /// Settle delay after forcing the relays off (ms)
    switch_time_ms: u32,
    /// Number of mismatches corrected since boot
    mismatch_count: u32,
}

impl RelaySequencer {
    /// Create a sequencer with the given relay switch time
    pub fn new(switch_time_ms: u32) -> Self {
        Self {
            switch_time_ms,
            mismatch_count: 0,
        }
    }

    /// Relay switch time (ms)
    pub fn switch_time_ms(&self) -> u32 {
        self.switch_time_ms
    }

    /// Number of mismatches corrected since boot
    pub fn mismatch_count(&self) -> u32 {
        self.mismatch_count
    }

    /// Make sure the relays are in the same state before heating
    ///
    /// A mismatched pair is forced off and held for the switch time. The
    /// returned `RelayMismatch` is informational: the pair is already safe.
    pub fn ensure_matched<R: RelayOutputs, D: DelayNs>(
        &mut self,
        relays: &mut R,
        delay: &mut D,
    ) -> Result<(), ControlError> {
        if !relays.is_mismatched() {
            return Ok(());
        }

        self.force_off(relays, delay);
        self.mismatch_count = self.mismatch_count.saturating_add(1);
        Err(ControlError::RelayMismatch)
    }

    /// Take the heat relay out before cooling
    ///
    /// Returns `true` if the relays had to be switched.
    pub fn release_heat<R: RelayOutputs, D: DelayNs>(
        &mut self,
        relays: &mut R,
        delay: &mut D,
    ) -> bool {
        if !relays.relay(Relay::Heat) {
            return false;
        }

        // The cool relay may be closed too (click feedback); open both
        self.force_off(relays, delay);
        true
    }

    /// Drive the cooling polarity
    pub fn engage_cool<R: RelayOutputs, D: DelayNs>(&mut self, relays: &mut R, delay: &mut D) {
        self.release_heat(relays, delay);
        relays.set_relay(Relay::Cool, true);
    }

    /// Stop cooling
    ///
    /// Opening the only active relay leads to the safe state directly.
    pub fn release_cool<R: RelayOutputs>(&mut self, relays: &mut R) {
        relays.set_relay(Relay::Cool, false);
    }

    /// Fail-safe: both relays off
    pub fn release_all<R: RelayOutputs, D: DelayNs>(&mut self, relays: &mut R, delay: &mut D) {
        if relays.relay(Relay::Heat) || relays.relay(Relay::Cool) {
            self.force_off(relays, delay);
        }
    }

    /// Drive both relays to the same state
    ///
    /// Only valid while the pair is matched; used by the click feedback.
    /// The write order keeps the transient on the cool side: the heat
    /// polarity is never driven, not even between the two writes.
    pub fn set_both<R: RelayOutputs>(relays: &mut R, active: bool) {
        if active {
            relays.set_relay(Relay::Cool, true);
            relays.set_relay(Relay::Heat, true);
        } else {
            relays.set_relay(Relay::Heat, false);
            relays.set_relay(Relay::Cool, false);
        }
    }

    fn force_off<R: RelayOutputs, D: DelayNs>(&self, relays: &mut R, delay: &mut D) {
        // Heat first, so the pair only passes through cool-only
        relays.set_relay(Relay::Heat, false);
        relays.set_relay(Relay::Cool, false);
        delay.delay_ms(self.switch_time_ms);
    }
}
