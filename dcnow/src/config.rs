// dcnow-rs/dcnow/src/config.rs

//! Connection and fetch configuration.
//!
//! Everything the original kept as hard-coded literals lives here as
//! explicit config with matching defaults, so callers (and tests) can
//! override numbers, credentials, endpoint, and loop timing without
//! touching the operations.

use std::time::Duration;

use crate::constants::{DEFAULT_FETCH_TIMEOUT_MS, LINK_WAIT_TICKS, POLL_TICK_MS};

/// Dial-up bring-up settings.
#[derive(Debug, Clone)]
pub struct DialConfig {
    /// Number to dial. DreamPi-style bridges accept any short dummy number.
    pub number: String,
    pub username: String,
    pub password: String,
    /// Dial without waiting for a dial tone.
    pub blind_dial: bool,
    /// Interval between link-up checks after connect is issued.
    pub link_tick: Duration,
    /// Hard ceiling on link-up checks before giving up.
    pub link_wait_ticks: u32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            number: "555".to_string(),
            username: "dream".to_string(),
            password: "dreamcast".to_string(),
            blind_dial: true,
            link_tick: Duration::from_millis(POLL_TICK_MS),
            link_wait_ticks: LINK_WAIT_TICKS,
        }
    }
}

/// HTTP fetch settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub host: String,
    pub path: String,
    pub port: u16,
    pub user_agent: String,
    /// Interval between readiness polls while connecting and receiving.
    pub tick: Duration,
    /// Idle timeout for the receive loop; resets on any forward progress.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            host: "dreamcast.online".to_string(),
            path: "/now".to_string(),
            port: 80,
            user_agent: "dcnow-rs/0.1".to_string(),
            tick: Duration::from_millis(POLL_TICK_MS),
            timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl FetchConfig {
    /// Render the one-shot request envelope sent in a single write.
    pub fn request_envelope(&self) -> String {
        format!(
            "GET {} HTTP/1.1\r\n\
             Host: {}\r\n\
             User-Agent: {}\r\n\
             Accept: application/json\r\n\
             Connection: close\r\n\
             \r\n",
            self.path, self.host, self.user_agent
        )
    }
}
