//! Failure-injection switch for canary rollback drills.
//!
//! One boolean per process, off at startup, flipped only through the
//! `/api/error-sim` endpoint. While on, every vote submission fails with a
//! simulated error before any queue interaction. Deliberately not shared
//! across instances so a single canary can be failed in isolation.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct ErrorSim {
    enabled: AtomicBool,
}

impl ErrorSim {
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Flips the switch and returns the new state.
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::SeqCst)
    }
}
