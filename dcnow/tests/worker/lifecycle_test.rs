#[path = "../common/mod.rs"]
mod common;

use std::thread;
use std::time::Duration;

use dcnow::transport::mock::MockLink;
use dcnow::worker::{Progress, Worker};
use dcnow::{Error, HttpTransport, WorkerState};

fn sample_worker() -> Worker {
    Worker::new(
        Box::new(MockLink::ready()),
        || -> Box<dyn HttpTransport> {
            common::helpers::boxed_mock_http_with_response(&common::fixtures::sample_response())
        },
        common::helpers::fast_dial_config(),
        common::helpers::fast_fetch_config(),
    )
}

fn poll_until_terminal(worker: &mut Worker) -> Progress {
    for _ in 0..5000 {
        match worker.poll() {
            Progress::Connecting | Progress::Fetching => {
                thread::sleep(Duration::from_millis(1))
            }
            terminal => return terminal,
        }
    }
    panic!("worker never reached a terminal state");
}

#[test]
fn full_session_connect_fetch_reclaim() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut worker = sample_worker();
    assert_eq!(worker.state(), WorkerState::Idle);
    assert!(worker.cached().is_none());

    worker.start_connect().unwrap();
    assert!(matches!(poll_until_terminal(&mut worker), Progress::Connected));
    assert_eq!(worker.status_text(), "Connected");

    worker.start_fetch(None).unwrap();
    match poll_until_terminal(&mut worker) {
        Progress::Fetched(result) => {
            assert!(result.is_valid);
            assert_eq!(result.total_players, 15);
            assert_eq!(result.game_count, 3);
            assert!(result.timestamp.is_some());
        }
        other => panic!("expected Fetched, got {:?}", other),
    }

    // Reclaimed and cached: the next poll is idle, the numbers stay.
    assert!(matches!(worker.poll(), Progress::Idle));
    assert_eq!(worker.cached().expect("cached").total_players, 15);
    assert_eq!(worker.status_text(), "Status updated");
}

#[test]
fn busy_worker_rejects_overlapping_starts() {
    let (link, gate) = MockLink::gated();
    let mut worker = Worker::new(
        Box::new(link),
        || -> Box<dyn HttpTransport> { common::helpers::boxed_mock_http_dead_peer() },
        common::helpers::fast_dial_config(),
        common::helpers::fast_fetch_config(),
    );

    worker.start_connect().unwrap();
    assert!(matches!(worker.start_fetch(None), Err(Error::Busy)));
    assert!(worker.is_busy());
    // The status line is readable while the operation is in flight.
    assert!(!worker.status_text().is_empty());

    gate.store(true, std::sync::atomic::Ordering::SeqCst);
    assert!(matches!(poll_until_terminal(&mut worker), Progress::Connected));
    assert!(!worker.is_busy());
}

#[test]
fn cancelled_connect_is_reported_once_then_idle() {
    let (link, _gate) = MockLink::gated();
    let mut worker = Worker::new(
        Box::new(link),
        || -> Box<dyn HttpTransport> { common::helpers::boxed_mock_http_dead_peer() },
        common::helpers::fast_dial_config(),
        common::helpers::fast_fetch_config(),
    );

    worker.start_connect().unwrap();
    worker.cancel();
    match poll_until_terminal(&mut worker) {
        Progress::Failed(Error::Cancelled) => {}
        other => panic!("expected Failed(Cancelled), got {:?}", other),
    }
    assert!(matches!(worker.poll(), Progress::Idle));
}

#[test]
fn failed_fetch_leaves_cache_for_the_caller() {
    let mut worker = sample_worker();
    worker.start_fetch(None).unwrap();
    assert!(matches!(poll_until_terminal(&mut worker), Progress::Fetched(_)));

    let cached = worker.cached().expect("cached");
    assert_eq!(cached.total_players, 15);
    // The cached copy is a value; dropping the worker does not revoke it.
    drop(worker);
    assert_eq!(cached.game_count, 3);
}
