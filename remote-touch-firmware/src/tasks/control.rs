//! Thermal control task
//!
//! Runs the controller forever: poll the sensors, step the mode machine,
//! log what changed and emit the status line. The loop yields between
//! iterations but never sleeps; pacing comes from the stopwatch.

use defmt::*;
use embassy_futures::yield_now;

use remote_touch_core::traits::StatusSink;
use remote_touch_core::TickOutcome;

use crate::board::{BoardController, BoardSampler, BoardStatus, BoardTouch};

/// Control task - never returns
#[embassy_executor::task]
pub async fn control_task(
    mut controller: BoardController,
    mut sampler: BoardSampler,
    mut touch: BoardTouch,
    mut status: BoardStatus,
) {
    info!(
        "Control task started (target {}°C, cooling window {} ms)",
        controller.config().target_temp_c,
        controller.config().max_cooling_time_ms
    );

    loop {
        let outcome = controller.tick(&mut sampler, &mut touch);
        log_outcome(&outcome, controller.relay_corrections());

        status.report_status(&controller.status());

        yield_now().await;
    }
}

fn log_outcome(outcome: &TickOutcome, corrections: u32) {
    if outcome.mode_changed() {
        debug!("Mode {} -> {}", outcome.previous, outcome.mode);
    }

    if outcome.relay_mismatch {
        warn!("Relays mismatched, forced off ({} corrections)", corrections);
    }

    if let Some(fault) = outcome.sensor_fault {
        warn!("Heating refused: {}", fault);
    }

    trace!(
        "mode={} duty={} clicked={}",
        outcome.mode,
        outcome.duty,
        outcome.clicked
    );
}
