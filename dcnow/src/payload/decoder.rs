// dcnow-rs/dcnow/src/payload/decoder.rs

use crate::constants::MAX_GAMES;
use crate::payload::scan;
use crate::types::GameRecord;
use crate::{Error, Result};

/// Decoded status payload, before it is timestamped into a `FetchResult`.
#[derive(Debug, Clone, Copy)]
pub struct DecodedStatus {
    /// Reported by the service; independent of the per-game counts.
    pub total_players: i32,
    pub games: [GameRecord; MAX_GAMES],
    pub game_count: usize,
}

impl DecodedStatus {
    pub fn games(&self) -> &[GameRecord] {
        &self.games[..self.game_count.min(MAX_GAMES)]
    }
}

impl Default for DecodedStatus {
    fn default() -> Self {
        Self {
            total_players: 0,
            games: [GameRecord::default(); MAX_GAMES],
            game_count: 0,
        }
    }
}

/// Decode the status payload from a text buffer.
///
/// Tolerant by policy: unknown fields are ignored, missing fields default
/// to empty/0, excess games past `MAX_GAMES` are silently dropped, and a
/// missing `games` array is a valid zero-game report. The only hard
/// failure is a top level that is not an object.
pub fn decode(buf: &[u8]) -> Result<DecodedStatus> {
    let open = scan::skip_whitespace(buf, 0);
    if open >= buf.len() || buf[open] != b'{' {
        return Err(Error::Parse);
    }
    let body = open + 1;

    let mut out = DecodedStatus::default();

    // Numeric failure here is non-fatal: the total stays 0.
    if let Some(value) = scan::find_key(buf, body, b"total_players") {
        if let Some((total, _)) = scan::parse_number(buf, value) {
            out.total_players = total;
        }
    }

    let Some(array) = scan::find_key(buf, body, b"games") else {
        return Ok(out);
    };
    if array >= buf.len() || buf[array] != b'[' {
        return Ok(out);
    }

    let mut pos = array + 1;
    while out.game_count < MAX_GAMES {
        pos = scan::skip_whitespace(buf, pos);
        if pos >= buf.len() || buf[pos] == b']' {
            break;
        }
        if buf[pos] != b'{' {
            break;
        }

        // Key scans are scoped to this element's brace-delimited slice so
        // a field missing here cannot be satisfied by the next element.
        let elem_start = pos + 1;
        let (elem_end, closed) = scan::skip_object(buf, elem_start);
        let body_end = if closed { elem_end - 1 } else { buf.len() };
        let elem = &buf[elem_start..body_end];

        let mut game = GameRecord::default();
        if let Some(value) = scan::find_key(elem, 0, b"name") {
            if scan::parse_string(elem, value, &mut game.name).is_none() {
                game.name.clear();
            }
        }
        if let Some(value) = scan::find_key(elem, 0, b"short_code") {
            if scan::parse_string(elem, value, &mut game.short_code).is_none() {
                game.short_code.clear();
            }
        }
        if let Some(value) = scan::find_key(elem, 0, b"players") {
            if let Some((players, _)) = scan::parse_number(elem, value) {
                game.player_count = players.max(0) as u32;
            }
        }

        out.games[out.game_count] = game;
        out.game_count += 1;

        pos = scan::skip_whitespace(buf, elem_end);
        if pos < buf.len() && buf[pos] == b',' {
            pos += 1;
        }
    }

    Ok(out)
}
