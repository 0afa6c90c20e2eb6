// dcnow-rs/dcnow/src/status.rs

//! Progress reporting seam between operations and presentation.
//!
//! Operations publish short human-readable lines ("Dialing 555...",
//! "Waiting for link (5/30 s)...") while they run on the worker thread.
//! Implementations must not block for long: publish runs between the
//! operation's blocking sub-steps.

/// Accepts short progress strings from a running operation.
pub trait StatusSink: Send + Sync {
    fn publish(&self, message: &str);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn publish(&self, _message: &str) {}
}

/// Forwards progress lines to the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn publish(&self, message: &str) {
        log::info!("{}", message);
    }
}
