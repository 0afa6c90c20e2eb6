#[path = "../common/mod.rs"]
mod common;

use std::sync::Mutex;

use dcnow::cache::StatusCache;
use dcnow::ops::{bring_up, fetch_status};
use dcnow::status::StatusSink;
use dcnow::transport::mock::{MockHttp, MockLink};

struct Recorder(Mutex<Vec<String>>);

impl Recorder {
    fn new() -> Self {
        Recorder(Mutex::new(Vec::new()))
    }

    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl StatusSink for Recorder {
    fn publish(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn connect_then_fetch_publishes_a_coherent_progress_stream() {
    let sink = Recorder::new();
    let cache = StatusCache::new();
    let not_cancelled = || false;

    let mut link = MockLink::ready();
    bring_up(
        &mut link,
        &common::helpers::fast_dial_config(),
        &sink,
        &not_cancelled,
    )
    .unwrap();

    let mut http = MockHttp::with_response(&common::fixtures::sample_response());
    let result = fetch_status(
        &mut http,
        &common::helpers::fast_fetch_config(),
        &cache,
        &sink,
        &not_cancelled,
    )
    .unwrap();

    assert!(result.is_valid);
    assert_eq!(result.total_players, 15);
    assert_eq!(result.game_count, 3);
    assert_eq!(cache.get().expect("cached").total_players, 15);

    // The user-visible narration runs dial -> link -> request -> done.
    let lines = sink.lines();
    let index_of = |needle: &str| {
        lines
            .iter()
            .position(|l| l.starts_with(needle))
            .unwrap_or_else(|| panic!("missing status line {:?} in {:?}", needle, lines))
    };
    assert!(index_of("Dialing") < index_of("Connected"));
    assert!(index_of("Connected") < index_of("Connecting to"));
    assert!(index_of("Waiting for response") < index_of("Status updated"));
}

#[test]
fn mock_link_is_configurable_by_struct_update() {
    // Callers outside the crate script the mock the same way the unit
    // tests do: override the knobs, default the bookkeeping.
    let mut link = MockLink {
        link_up_after: 2,
        ..MockLink::default()
    };
    bring_up(
        &mut link,
        &common::helpers::fast_dial_config(),
        &dcnow::status::NullSink,
        &|| false,
    )
    .unwrap();
    assert_eq!(link.link_polls, 2);
    assert!(!link.torn_down);
}

#[test]
fn repeat_fetch_overwrites_cache_with_newer_numbers() {
    let cache = StatusCache::new();
    let cfg = common::helpers::fast_fetch_config();
    let sink = dcnow::status::NullSink;
    let not_cancelled = || false;

    let first = common::helpers::ok_response(r#"{"total_players":5,"games":[]}"#);
    let mut http = MockHttp::with_response(&first);
    fetch_status(&mut http, &cfg, &cache, &sink, &not_cancelled).unwrap();

    let second = common::helpers::ok_response(r#"{"total_players":9,"games":[]}"#);
    let mut http = MockHttp::with_response(&second);
    fetch_status(&mut http, &cfg, &cache, &sink, &not_cancelled).unwrap();

    assert_eq!(cache.get().expect("cached").total_players, 9);
}

#[test]
fn airy_response_is_accepted_end_to_end() {
    let cache = StatusCache::new();
    let mut http = MockHttp::with_response(&common::fixtures::airy_response());
    let result = fetch_status(
        &mut http,
        &common::helpers::fast_fetch_config(),
        &cache,
        &dcnow::status::NullSink,
        &|| false,
    )
    .unwrap();
    assert_eq!(result.total_players, 4);
    assert_eq!(result.games()[0].name, "Alien Front Online");
}
