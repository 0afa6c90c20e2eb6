// dcnow-rs/dcnow/src/payload/scan.rs

//! Byte-level scan helpers for the payload decoder.
//!
//! These are deliberately not a tokenizer: `find_key` walks forward
//! matching quoted keys textually, and the object skipper only counts
//! braces. Every helper is bounds-checked and allocation-free.

use crate::types::BoundedString;

/// Advance past ASCII whitespace, stopping at the end of the buffer.
pub fn skip_whitespace(buf: &[u8], mut pos: usize) -> usize {
    while pos < buf.len() && buf[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Linear scan for a quoted key from `from`, returning the index of the
/// first byte of its value (past the colon and any whitespace). Escaped
/// quotes inside keys are not handled; this is the tolerant key scan,
/// not a parser.
pub fn find_key(buf: &[u8], from: usize, key: &[u8]) -> Option<usize> {
    let mut pos = from;
    while pos < buf.len() {
        pos = skip_whitespace(buf, pos);
        if pos >= buf.len() {
            return None;
        }
        if buf[pos] == b'"' {
            let start = pos + 1;
            if let Some(rel) = buf[start..].iter().position(|&b| b == b'"') {
                let end = start + rel;
                if &buf[start..end] == key {
                    let after = skip_whitespace(buf, end + 1);
                    if after < buf.len() && buf[after] == b':' {
                        return Some(skip_whitespace(buf, after + 1));
                    }
                }
            }
        }
        pos += 1;
    }
    None
}

/// Parse a decimal integer with optional leading minus. Accumulation
/// saturates so a hostile digit run cannot overflow. Returns the value
/// and the position past the last digit.
pub fn parse_number(buf: &[u8], mut pos: usize) -> Option<(i32, usize)> {
    let mut sign = 1i64;
    if pos < buf.len() && buf[pos] == b'-' {
        sign = -1;
        pos += 1;
    }
    if pos >= buf.len() || !buf[pos].is_ascii_digit() {
        return None;
    }
    let mut value: i64 = 0;
    while pos < buf.len() && buf[pos].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((buf[pos] - b'0') as i64);
        pos += 1;
    }
    let signed = (value * sign).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    Some((signed, pos))
}

/// Copy a quoted string into `out`, truncating at its capacity. Handles
/// the minimal escape table (`\n \t \r \" \\`); any other escaped byte is
/// kept literally. Returns the position past the closing quote, or None
/// if the opening or closing quote is missing (out may then hold a
/// partial copy; callers reset it).
pub fn parse_string<const N: usize>(
    buf: &[u8],
    mut pos: usize,
    out: &mut BoundedString<N>,
) -> Option<usize> {
    if pos >= buf.len() || buf[pos] != b'"' {
        return None;
    }
    pos += 1;
    out.clear();
    while pos < buf.len() && buf[pos] != b'"' {
        let b = if buf[pos] == b'\\' {
            pos += 1;
            if pos >= buf.len() {
                return None;
            }
            match buf[pos] {
                b'n' => b'\n',
                b't' => b'\t',
                b'r' => b'\r',
                b'"' => b'"',
                b'\\' => b'\\',
                other => other,
            }
        } else {
            buf[pos]
        };
        let _ = out.push_byte(b);
        pos += 1;
    }
    if pos >= buf.len() {
        return None;
    }
    Some(pos + 1)
}

/// Skip past an object body by brace-depth counting. `pos` points just
/// after the opening brace. Returns the position past the matching
/// closing brace and whether the object actually closed before the
/// buffer ended.
pub fn skip_object(buf: &[u8], mut pos: usize) -> (usize, bool) {
    let mut depth = 1usize;
    while pos < buf.len() {
        match buf[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return (pos + 1, true);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    (pos, false)
}
