#[path = "../common/mod.rs"]
mod common;

use dcnow::cache::StatusCache;
use dcnow::ops::fetch_status;
use dcnow::status::NullSink;
use dcnow::transport::mock::{MockEvent, MockHttp};
use dcnow::Error;

fn run(http: &mut MockHttp) -> dcnow::Result<dcnow::FetchResult> {
    let cache = StatusCache::new();
    fetch_status(
        http,
        &common::helpers::fast_fetch_config(),
        &cache,
        &NullSink,
        &|| false,
    )
}

#[test]
fn server_error_statuses_surface_their_code() {
    for code in [404u16, 500, 503] {
        let raw = common::helpers::response_with_status(code, "Nope", r#"{"total_players":0}"#);
        let mut http = MockHttp::with_response(&raw);
        match run(&mut http) {
            Err(Error::Status(got)) => assert_eq!(got, code),
            other => panic!("expected Status({}), got {:?}", code, other),
        }
    }
}

#[test]
fn headers_without_boundary_are_malformed() {
    let mut http = MockHttp::with_response(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n");
    assert!(matches!(run(&mut http), Err(Error::MalformedResponse)));
}

#[test]
fn empty_body_is_rejected_as_invalid_payload() {
    let raw = common::helpers::ok_response("");
    let mut http = MockHttp::with_response(&raw);
    assert!(matches!(run(&mut http), Err(Error::InvalidPayload)));
}

#[test]
fn garbage_body_is_a_parse_error() {
    let raw = common::helpers::ok_response("<html>offline</html>");
    let mut http = MockHttp::with_response(&raw);
    assert!(matches!(run(&mut http), Err(Error::Parse)));
}

#[test]
fn peer_that_closes_immediately_is_a_receive_failure() {
    let mut http = MockHttp::new();
    http.push_event(MockEvent::Closed);
    assert!(matches!(run(&mut http), Err(Error::ReceiveFailed)));
}

#[test]
fn partial_response_with_complete_payload_is_accepted() {
    // Peer stalls after sending everything; the idle timeout finalizes.
    let mut http = MockHttp::new();
    http.push_event(MockEvent::Data(common::fixtures::sample_response()));
    let result = run(&mut http).unwrap();
    assert_eq!(result.total_players, 15);
}
