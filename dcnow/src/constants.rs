// dcnow-rs/dcnow/src/constants.rs
//! Size caps and timing constants used across the crate

/// Hard cap on the number of game entries decoded from one payload.
pub const MAX_GAMES: usize = 20;

/// Byte cap for a decoded game name.
pub const MAX_GAME_NAME_LEN: usize = 64;

/// Byte cap for an optional compact short code.
pub const MAX_SHORT_CODE_LEN: usize = 12;

/// Byte cap for the worker status line shown while an operation runs.
pub const MAX_STATUS_LEN: usize = 128;

/// Byte cap for the error text carried inside a failed `FetchResult`.
pub const MAX_ERROR_LEN: usize = 64;

/// Fixed receive buffer for one HTTP response (headers + body).
pub const RESPONSE_BUF_LEN: usize = 8192;

/// Poll interval for link-up and socket readiness loops, in milliseconds.
pub const POLL_TICK_MS: u64 = 100;

/// Link-up wait ceiling: 300 ticks at 100 ms = 30 seconds.
pub const LINK_WAIT_TICKS: u32 = 300;

/// Default idle timeout for the fetch receive loop, in milliseconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
