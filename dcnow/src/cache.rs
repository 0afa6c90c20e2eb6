// dcnow-rs/dcnow/src/cache.rs

use std::sync::Mutex;

use crate::types::FetchResult;

/// Last-known-good result cache.
///
/// One slot, overwritten only by a successful fetch, so a transient
/// failure never costs the caller the previous numbers. No TTL: a stale
/// entry stays until the next success or an explicit `clear()`.
#[derive(Debug, Default)]
pub struct StatusCache {
    slot: Mutex<Option<FetchResult>>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy out the cached result, or `None` if never populated.
    pub fn get(&self) -> Option<FetchResult> {
        *crate::utils::lock(&self.slot)
    }

    /// Replace the slot. Called only from the fetch operation on success.
    pub(crate) fn store(&self, result: &FetchResult) {
        *crate::utils::lock(&self.slot) = Some(*result);
    }

    pub fn clear(&self) {
        *crate::utils::lock(&self.slot) = None;
    }
}
