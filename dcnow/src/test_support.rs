//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common payload and mock-transport setup so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::{DialConfig, FetchConfig};
use crate::transport::http::HttpTransport;
use crate::transport::mock::{MockEvent, MockHttp};
use crate::utils::ms;

/// A representative status body: mixed active and idle games, a total
/// that does not equal the per-game sum, and one entry with a short code.
#[doc(hidden)]
pub fn sample_status_body() -> &'static str {
    r#"{"total_players":15,"games":[
        {"name":"Phantasy Star Online","short_code":"PSO","players":12},
        {"name":"Quake III Arena","players":0},
        {"name":"ChuChu Rocket!","players":2}
    ]}"#
}

/// Wrap a body in a minimal 200 response with the header boundary the
/// fetch operation splits on.
#[doc(hidden)]
pub fn ok_response(body: &str) -> Vec<u8> {
    response_with_status(200, "OK", body)
}

#[doc(hidden)]
pub fn response_with_status(code: u16, reason: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{}",
        code, reason, body
    )
    .into_bytes()
}

/// Build a MockHttp that replays `raw` and closes, boxed as the transport
/// trait object a `Worker` factory returns.
#[doc(hidden)]
pub fn boxed_mock_http_with_response(raw: &[u8]) -> Box<dyn HttpTransport> {
    Box::new(MockHttp::with_response(raw))
}

/// A transport that reads as a dead peer: immediate orderly close with
/// zero bytes.
#[doc(hidden)]
pub fn boxed_mock_http_dead_peer() -> Box<dyn HttpTransport> {
    let mut http = MockHttp::new();
    http.push_event(MockEvent::Closed);
    Box::new(http)
}

/// Dial config with millisecond ticks so link-wait paths run fast.
#[doc(hidden)]
pub fn fast_dial_config() -> DialConfig {
    DialConfig {
        link_tick: ms(1),
        link_wait_ticks: 50,
        ..DialConfig::default()
    }
}

/// Fetch config with millisecond ticks and a short idle timeout.
#[doc(hidden)]
pub fn fast_fetch_config() -> FetchConfig {
    FetchConfig {
        tick: ms(1),
        timeout: ms(50),
        ..FetchConfig::default()
    }
}
