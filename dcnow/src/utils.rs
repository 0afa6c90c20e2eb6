// dcnow-rs/dcnow/src/utils.rs
//! Small helpers shared across the crate.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Lock a mutex, recovering the guard if a previous holder panicked.
/// Worker state must stay observable even after a poisoned lock.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
