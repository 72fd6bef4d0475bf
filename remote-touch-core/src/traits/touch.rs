//! Touch input trait

/// Touch inputs sampled for one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchInputs {
    /// Remote operator asks for heat (digital pin)
    pub remote_touch: bool,
    /// Someone is touching the plate (capacitive scan result)
    pub local_touch: bool,
}

impl TouchInputs {
    /// Create touch inputs
    pub const fn new(remote_touch: bool, local_touch: bool) -> Self {
        Self {
            remote_touch,
            local_touch,
        }
    }
}

/// Source of touch inputs
pub trait TouchSource {
    /// Poll the touch inputs
    ///
    /// Returns `None` while the capacitive scan is still busy; the caller
    /// keeps the previous value for this tick.
    fn poll_touch(&mut self) -> Option<TouchInputs>;
}
