//! Tuner task
//!
//! Calibration aid: heater and relays are held off while the raw divider
//! voltage and the local touch state stream over the debug UART.

use defmt::*;
use embassy_time::{Duration, Ticker};

use remote_touch_core::traits::{TemperatureSource, TouchSource};

use crate::board::{BoardHeater, BoardRelays, BoardSampler, BoardStatus, BoardTouch};

/// Sample interval in milliseconds
pub const TUNER_INTERVAL_MS: u64 = 100;

/// Tuner task - never returns
#[embassy_executor::task]
pub async fn tuner_task(
    relays: BoardRelays,
    heater: BoardHeater,
    mut sampler: BoardSampler,
    mut touch: BoardTouch,
    mut status: BoardStatus,
) {
    info!("Tuner task started, outputs held off");

    // Owned for the lifetime of the task so the pins stay driven inactive
    let _outputs = (relays, heater);

    let mut ticker = Ticker::every(Duration::from_millis(TUNER_INTERVAL_MS));
    let mut volts = 0.0;
    let mut local_touch = false;

    loop {
        ticker.next().await;

        match sampler.poll_voltage() {
            Some(Ok(v)) => volts = v,
            Some(Err(e)) => warn!("Tuner: {}", e),
            None => {}
        }

        if let Some(inputs) = touch.poll_touch() {
            local_touch = inputs.local_touch;
        }

        status.write_tuner_sample(volts, local_touch);
    }
}
