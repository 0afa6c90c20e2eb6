// Fetch the live Dreamcast Now numbers over the host's own network.

// On a PC there is no modem to bring up, so the link transport below
// reports the network as already active and the worker goes straight to
// the HTTP fetch. On real hardware the same `Worker` would be built with
// a modem-backed `LinkTransport` instead.

use std::thread;
use std::time::Duration;

use dcnow::prelude::*;

/// The host OS already routes packets; bring-up is a no-op.
struct HostNetwork;

impl LinkTransport for HostNetwork {
    fn already_active(&mut self) -> bool {
        true
    }

    fn init_hardware(&mut self) -> Result<()> {
        Ok(())
    }

    fn init_protocol(&mut self) -> Result<()> {
        Ok(())
    }

    fn dial(&mut self, _number: &str, _blind: bool) -> Result<()> {
        Ok(())
    }

    fn set_credentials(&mut self, _username: &str, _password: &str) -> Result<()> {
        Ok(())
    }

    fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    fn link_up(&mut self) -> bool {
        true
    }

    fn teardown(&mut self) {}
}

fn main() -> Result<()> {
    env_logger::init();

    let mut worker = Worker::new(
        Box::new(HostNetwork),
        || -> Box<dyn HttpTransport> { Box::new(TcpHttpTransport::new()) },
        DialConfig::default(),
        FetchConfig::default(),
    );

    worker.start_connect()?;
    wait(&mut worker);

    worker.start_fetch(Some(Duration::from_secs(15)))?;
    match wait(&mut worker) {
        Progress::Fetched(result) => {
            println!("Dreamcast Now: {} players online", result.total_players);
            for game in result.games() {
                println!(
                    "  {:<24} {:>3} player(s){}",
                    game.display_name(),
                    game.player_count,
                    if game.is_active() { "" } else { " (idle)" },
                );
            }
        }
        Progress::Failed(e) => {
            eprintln!("fetch failed: {}", e);
            if let Some(last) = worker.cached() {
                println!("last known good: {} players", last.total_players);
            }
        }
        other => eprintln!("unexpected worker answer: {:?}", other),
    }

    Ok(())
}

/// Poll once per frame, echoing the status line as it changes.
fn wait(worker: &mut Worker) -> Progress {
    let mut last_status = String::new();
    loop {
        let progress = worker.poll();
        let status = worker.status_text();
        if status != last_status {
            println!("[{}]", status);
            last_status = status;
        }
        match progress {
            Progress::Connecting | Progress::Fetching => {
                thread::sleep(Duration::from_millis(50))
            }
            terminal => return terminal,
        }
    }
}
