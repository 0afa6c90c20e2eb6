// dcnow-rs/dcnow/src/error.rs

use thiserror::Error;

/// Common error type covering both operations and the worker guard.
///
/// Every numbered step of the connect and fetch operations maps to its
/// own variant so callers can tell a dial failure from a link timeout.
#[derive(Error, Debug)]
pub enum Error {
    #[error("modem hardware init failed: {0}")]
    HardwareInit(String),

    #[error("ppp subsystem init failed: {0}")]
    ProtocolInit(String),

    #[error("dial failed: {0}")]
    DialFailed(String),

    #[error("setting credentials failed: {0}")]
    AuthFailed(String),

    #[error("connect failed: {0}")]
    ConnectFailed(String),

    #[error("connect timed out after {waited_ms} ms")]
    ConnectTimeout { waited_ms: u64 },

    #[error("operation cancelled")]
    Cancelled,

    #[error("socket error: {0}")]
    Socket(String),

    #[error("hostname resolution failed: {0}")]
    Resolution(String),

    #[error("failed to send request")]
    SendFailed,

    #[error("failed to receive data")]
    ReceiveFailed,

    #[error("malformed http response (no header boundary)")]
    MalformedResponse,

    #[error("http status {0}")]
    Status(u16),

    #[error("payload parse error: top level is not an object")]
    Parse,

    #[error("payload missing or empty")]
    InvalidPayload,

    #[error("worker already busy")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
