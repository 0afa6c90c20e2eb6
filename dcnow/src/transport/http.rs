// dcnow-rs/dcnow/src/transport/http.rs

use crate::Result;

/// Connection readiness as seen by one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Pending,
}

/// One receive poll outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecvEvent {
    /// `n` bytes were written into the caller's buffer.
    Data(usize),
    /// Orderly close by the peer. The one-shot protocol in use signals
    /// end-of-body this way.
    Closed,
    /// Nothing available right now; poll again after a tick.
    Idle,
}

/// Readiness-polled byte stream for the fetch operation.
///
/// Each method returns quickly; the fetch operation supplies the timed
/// loop around `poll_connected`/`poll_recv`. This replaces ad-hoc
/// select-and-yield loops with a seam a mock can script.
pub trait HttpTransport: Send {
    /// Resolve the host and prepare to connect. No traffic flows yet.
    fn open(&mut self, host: &str, port: u16) -> Result<()>;

    /// Drive the connection attempt one step. `Pending` means call again
    /// after a tick; a hard failure is an error.
    fn poll_connected(&mut self) -> Result<Readiness>;

    /// Write `data`, returning the number of bytes accepted.
    fn send(&mut self, data: &[u8]) -> Result<usize>;

    /// Poll for received bytes into `buf`.
    fn poll_recv(&mut self, buf: &mut [u8]) -> Result<RecvEvent>;

    /// Release the connection. Idempotent.
    fn close(&mut self);
}
