//! Telemetry sink trait

use crate::status::StatusLine;

/// Fire-and-forget status output
///
/// Implementations swallow their own transport errors: a failed report must
/// never influence a control decision.
pub trait StatusSink {
    /// Emit one status line
    fn report_status(&mut self, status: &StatusLine);
}
