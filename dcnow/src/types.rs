// dcnow-rs/dcnow/src/types.rs

use std::fmt;
use std::time::Instant;

use crate::constants::{MAX_ERROR_LEN, MAX_GAMES, MAX_GAME_NAME_LEN, MAX_SHORT_CODE_LEN};

/// Fixed-capacity string buffer - Newtype Pattern over a byte array.
///
/// Writes truncate at the capacity; nothing here allocates. Used for every
/// string the decoder or the worker publishes, so a hostile payload can
/// never grow memory.
#[derive(Clone, Copy)]
pub struct BoundedString<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedString<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Build from a `&str`, truncating at the capacity.
    pub fn from_str_lossy(s: &str) -> Self {
        let mut out = Self::new();
        out.set(s);
        out
    }

    /// Replace the contents, truncating at the capacity.
    pub fn set(&mut self, s: &str) {
        self.clear();
        for &b in s.as_bytes() {
            if !self.push_byte(b) {
                break;
            }
        }
    }

    /// Append one byte. Returns false (and drops the byte) when full.
    pub fn push_byte(&mut self, b: u8) -> bool {
        if self.len >= N {
            return false;
        }
        self.buf[self.len] = b;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// View as `&str`. Truncation can split a multi-byte sequence, so this
    /// clips at the last valid UTF-8 boundary instead of failing.
    pub fn as_str(&self) -> &str {
        match std::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(e) => {
                std::str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or_default()
            }
        }
    }
}

impl<const N: usize> Default for BoundedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for BoundedString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for BoundedString<N> {}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Debug for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game entry decoded from the status payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRecord {
    /// Full game name as sent by the service.
    pub name: BoundedString<MAX_GAME_NAME_LEN>,
    /// Optional compact code; empty when the service did not send one.
    pub short_code: BoundedString<MAX_SHORT_CODE_LEN>,
    /// Players currently online in this game.
    pub player_count: u32,
}

impl GameRecord {
    /// A game is active when anyone is playing it.
    pub fn is_active(&self) -> bool {
        self.player_count > 0
    }

    /// Name for width-constrained displays: the short code when present,
    /// the full name otherwise.
    pub fn display_name(&self) -> &str {
        if self.short_code.is_empty() {
            self.name.as_str()
        } else {
            self.short_code.as_str()
        }
    }
}

/// Outcome of one fetch. Built once on completion and never mutated; a
/// successful result atomically replaces the cached one.
#[derive(Debug, Clone, Copy)]
pub struct FetchResult {
    /// Total as reported by the service. Not derived from the per-game
    /// counts and not guaranteed consistent with them.
    pub total_players: i32,
    pub games: [GameRecord; MAX_GAMES],
    pub game_count: usize,
    pub is_valid: bool,
    /// Monotonic capture time; `None` only for the default/failed value.
    pub timestamp: Option<Instant>,
    /// Meaningful only when `is_valid` is false.
    pub error_message: BoundedString<MAX_ERROR_LEN>,
}

impl FetchResult {
    /// The decoded games, in source order.
    pub fn games(&self) -> &[GameRecord] {
        &self.games[..self.game_count.min(MAX_GAMES)]
    }

    /// Build a failed result carrying a bounded error text.
    pub fn failed(message: &str) -> Self {
        let mut out = Self::default();
        out.error_message.set(message);
        out
    }
}

impl Default for FetchResult {
    fn default() -> Self {
        Self {
            total_players: 0,
            games: [GameRecord::default(); MAX_GAMES],
            game_count: 0,
            is_valid: false,
            timestamp: None,
            error_message: BoundedString::new(),
        }
    }
}

/// Worker state machine. `Done`/`Error` are terminal until the next
/// `poll()` observes them and reclaims the worker to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkerState {
    #[default]
    Idle,
    Connecting,
    Fetching,
    Done,
    Error,
}
