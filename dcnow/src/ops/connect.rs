// dcnow-rs/dcnow/src/ops/connect.rs

use std::thread;

use crate::config::DialConfig;
use crate::status::StatusSink;
use crate::transport::link::LinkTransport;
use crate::{Error, Result};

/// Bring the dial-up transport from unknown/inactive to link-up.
///
/// Idempotent when the transport is already active. Each step maps to its
/// own error variant and nothing is retried here; retry is the caller's
/// decision. Cancellation is cooperative: the flag is observed between
/// the coarse blocking steps and on every link-wait tick, never inside a
/// blocking call.
pub fn bring_up(
    link: &mut dyn LinkTransport,
    cfg: &DialConfig,
    sink: &dyn StatusSink,
    cancelled: &dyn Fn() -> bool,
) -> Result<()> {
    if link.already_active() {
        log::debug!("transport already up, skipping bring-up");
        sink.publish("Network already connected");
        return Ok(());
    }

    if cancelled() {
        return Err(Error::Cancelled);
    }

    sink.publish("Initializing modem...");
    link.init_hardware()
        .map_err(|e| Error::HardwareInit(e.to_string()))?;

    sink.publish("Starting PPP...");
    link.init_protocol()
        .map_err(|e| Error::ProtocolInit(e.to_string()))?;

    if cancelled() {
        link.teardown();
        return Err(Error::Cancelled);
    }

    // The dial itself can block for tens of seconds and cannot be
    // interrupted mid-call.
    sink.publish(&format!("Dialing {}...", cfg.number));
    log::info!("dialing {} (blind={})", cfg.number, cfg.blind_dial);
    link.dial(&cfg.number, cfg.blind_dial)
        .map_err(|e| Error::DialFailed(e.to_string()))?;

    link.set_credentials(&cfg.username, &cfg.password)
        .map_err(|e| Error::AuthFailed(e.to_string()))?;

    if cancelled() {
        link.teardown();
        return Err(Error::Cancelled);
    }

    sink.publish("Connecting...");
    link.connect()
        .map_err(|e| Error::ConnectFailed(e.to_string()))?;

    sink.publish("Waiting for link...");
    for tick in 0..cfg.link_wait_ticks {
        if cancelled() {
            log::info!("bring-up cancelled during link wait");
            link.teardown();
            return Err(Error::Cancelled);
        }
        if link.link_up() {
            log::info!("link established after {} ticks", tick);
            sink.publish("Connected");
            return Ok(());
        }
        thread::sleep(cfg.link_tick);

        // Progress line every 5 seconds at the default 100 ms tick.
        if (tick + 1) % 50 == 0 {
            let tick_ms = cfg.link_tick.as_millis() as u64;
            sink.publish(&format!(
                "Waiting for link ({}/{} s)...",
                (tick as u64 + 1) * tick_ms / 1000,
                cfg.link_wait_ticks as u64 * tick_ms / 1000,
            ));
        }
    }

    let waited_ms = cfg.link_wait_ticks as u64 * cfg.link_tick.as_millis() as u64;
    log::warn!("link wait timed out after {} ms", waited_ms);
    link.teardown();
    Err(Error::ConnectTimeout { waited_ms })
}
