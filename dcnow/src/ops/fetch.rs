// dcnow-rs/dcnow/src/ops/fetch.rs

use std::thread;
use std::time::Instant;

use crate::cache::StatusCache;
use crate::config::FetchConfig;
use crate::constants::RESPONSE_BUF_LEN;
use crate::payload;
use crate::status::StatusSink;
use crate::transport::http::{HttpTransport, Readiness, RecvEvent};
use crate::types::FetchResult;
use crate::{Error, Result};

/// Fetch and decode the status payload over an established transport.
///
/// The receive timeout is an idle timeout: any forward progress resets
/// the deadline. A timeout or receive error after partial data finalizes
/// leniently with the bytes received so far; any non-empty response is
/// considered usable. On success the cache is replaced atomically.
pub fn fetch_status(
    http: &mut dyn HttpTransport,
    cfg: &FetchConfig,
    cache: &StatusCache,
    sink: &dyn StatusSink,
    cancelled: &dyn Fn() -> bool,
) -> Result<FetchResult> {
    let mut buf = [0u8; RESPONSE_BUF_LEN];
    let outcome = exchange(http, cfg, sink, cancelled, &mut buf);
    http.close();
    let total = outcome?;
    let response = &buf[..total];

    // Envelope/payload boundary.
    let boundary = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or(Error::MalformedResponse)?;
    let header = &response[..boundary];
    let body = &response[boundary + 4..];

    if let Some(code) = status_code(header) {
        if code != 200 {
            log::warn!("server answered status {}", code);
            return Err(Error::Status(code));
        }
    }

    if body.is_empty() {
        return Err(Error::InvalidPayload);
    }

    let status = payload::decode(body)?;

    let mut result = FetchResult::default();
    result.total_players = status.total_players;
    result.games = status.games;
    result.game_count = status.game_count;
    result.is_valid = true;
    result.timestamp = Some(Instant::now());

    cache.store(&result);
    log::info!(
        "fetched {} games, {} players online",
        result.game_count,
        result.total_players
    );
    sink.publish("Status updated");
    Ok(result)
}

/// Connect, send the request, and receive the raw response. Returns the
/// number of bytes received; the caller owns closing the transport.
fn exchange(
    http: &mut dyn HttpTransport,
    cfg: &FetchConfig,
    sink: &dyn StatusSink,
    cancelled: &dyn Fn() -> bool,
    buf: &mut [u8],
) -> Result<usize> {
    sink.publish(&format!("Connecting to {}...", cfg.host));
    http.open(&cfg.host, cfg.port)?;

    // Handshake phase: wall-clock deadline, polled at the tick interval.
    let start = Instant::now();
    loop {
        if cancelled() {
            return Err(Error::Cancelled);
        }
        match http.poll_connected()? {
            Readiness::Ready => break,
            Readiness::Pending => {
                if start.elapsed() >= cfg.timeout {
                    return Err(Error::ConnectTimeout {
                        waited_ms: start.elapsed().as_millis() as u64,
                    });
                }
                thread::sleep(cfg.tick);
            }
        }
    }

    let request = cfg.request_envelope();
    if http.send(request.as_bytes())? == 0 {
        return Err(Error::SendFailed);
    }

    sink.publish("Waiting for response...");
    let mut total = 0usize;
    let mut last_progress = Instant::now();
    while total < buf.len() {
        if cancelled() {
            return Err(Error::Cancelled);
        }
        match http.poll_recv(&mut buf[total..]) {
            Ok(RecvEvent::Data(n)) => {
                total += n;
                // Forward progress extends the deadline.
                last_progress = Instant::now();
            }
            Ok(RecvEvent::Closed) => {
                if total == 0 {
                    return Err(Error::ReceiveFailed);
                }
                // Orderly close ends the one-shot response.
                break;
            }
            Ok(RecvEvent::Idle) => {
                if last_progress.elapsed() >= cfg.timeout {
                    if total == 0 {
                        return Err(Error::ReceiveFailed);
                    }
                    log::debug!("idle timeout with {} bytes buffered, finalizing", total);
                    break;
                }
                thread::sleep(cfg.tick);
            }
            Err(e) => {
                if total == 0 {
                    return Err(e);
                }
                break;
            }
        }
    }
    Ok(total)
}

/// Extract the numeric code from a recognized status line. Responses
/// without the expected prefix skip the check entirely.
fn status_code(header: &[u8]) -> Option<u16> {
    if !header.starts_with(b"HTTP/1.") {
        return None;
    }
    let space = header.iter().position(|&b| b == b' ')?;
    let (code, _) = payload::scan::parse_number(header, space + 1)?;
    Some(code.clamp(0, u16::MAX as i32) as u16)
}
