// dcnow-rs/dcnow/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::transport::http::{HttpTransport, Readiness, RecvEvent};
use crate::transport::link::LinkTransport;
use crate::{Error, Result};

/// Mock dial-up link for unit tests. Records the call order and fails
/// whichever steps a test arms.
#[derive(Debug, Default)]
pub struct MockLink {
    /// Report the transport as already up (bring-up short-circuits).
    pub active: bool,
    pub fail_hardware: bool,
    pub fail_protocol: bool,
    pub fail_dial: bool,
    pub fail_auth: bool,
    pub fail_connect: bool,
    /// Number of `link_up` polls before reporting up. `u32::MAX` = never.
    pub link_up_after: u32,
    /// Polls consumed so far against `link_up_after`.
    pub link_polls: u32,
    /// Call order for assertions, e.g. `["init_hardware", "dial", ...]`.
    pub calls: Vec<&'static str>,
    pub torn_down: bool,
    /// External link-up gate; when set it overrides `link_up_after`.
    pub gate: Option<Arc<AtomicBool>>,
}

impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A link that comes up on the first poll.
    pub fn ready() -> Self {
        Self::default()
    }

    /// A link whose link-up is controlled by the returned gate. Lets a
    /// test hold a worker in `Connecting` deterministically and release
    /// it when ready.
    pub fn gated() -> (Self, Arc<AtomicBool>) {
        let gate = Arc::new(AtomicBool::new(false));
        let link = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (link, gate)
    }

    fn forced_failure() -> Error {
        Error::Socket("forced failure".to_string())
    }
}

impl LinkTransport for MockLink {
    fn already_active(&mut self) -> bool {
        self.calls.push("already_active");
        self.active
    }

    fn init_hardware(&mut self) -> Result<()> {
        self.calls.push("init_hardware");
        if self.fail_hardware {
            return Err(Self::forced_failure());
        }
        Ok(())
    }

    fn init_protocol(&mut self) -> Result<()> {
        self.calls.push("init_protocol");
        if self.fail_protocol {
            return Err(Self::forced_failure());
        }
        Ok(())
    }

    fn dial(&mut self, _number: &str, _blind: bool) -> Result<()> {
        self.calls.push("dial");
        if self.fail_dial {
            return Err(Self::forced_failure());
        }
        Ok(())
    }

    fn set_credentials(&mut self, _username: &str, _password: &str) -> Result<()> {
        self.calls.push("set_credentials");
        if self.fail_auth {
            return Err(Self::forced_failure());
        }
        Ok(())
    }

    fn connect(&mut self) -> Result<()> {
        self.calls.push("connect");
        if self.fail_connect {
            return Err(Self::forced_failure());
        }
        Ok(())
    }

    fn link_up(&mut self) -> bool {
        if let Some(gate) = &self.gate {
            return gate.load(Ordering::SeqCst);
        }
        if self.link_polls >= self.link_up_after {
            return true;
        }
        self.link_polls += 1;
        false
    }

    fn teardown(&mut self) {
        self.calls.push("teardown");
        self.torn_down = true;
    }
}

/// Scripted receive event for `MockHttp`.
#[derive(Debug, Clone)]
pub enum MockEvent {
    Data(Vec<u8>),
    Closed,
    Idle,
}

/// Mock HTTP transport. Records the request and plays back a script of
/// receive events; an exhausted script reads as a silent peer (`Idle`),
/// which is how timeout paths are exercised.
#[derive(Debug, Default)]
pub struct MockHttp {
    pub fail_open: bool,
    pub fail_connect: bool,
    /// Report `Pending` this many times before `Ready`.
    pub connect_pending_polls: u32,
    /// Cap on bytes accepted per `send`; `Some(0)` forces a send failure.
    pub send_accepts: Option<usize>,
    pub script: VecDeque<MockEvent>,
    pub sent: Vec<Vec<u8>>,
    pub opened: Option<(String, u16)>,
    pub closed: bool,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that connects immediately and replays `raw` as one
    /// data burst followed by an orderly close.
    pub fn with_response(raw: &[u8]) -> Self {
        let mut mock = Self::default();
        mock.push_event(MockEvent::Data(raw.to_vec()));
        mock.push_event(MockEvent::Closed);
        mock
    }

    pub fn push_event(&mut self, event: MockEvent) {
        self.script.push_back(event);
    }
}

impl HttpTransport for MockHttp {
    fn open(&mut self, host: &str, port: u16) -> Result<()> {
        self.opened = Some((host.to_string(), port));
        if self.fail_open {
            return Err(Error::Resolution("forced failure".to_string()));
        }
        Ok(())
    }

    fn poll_connected(&mut self) -> Result<Readiness> {
        if self.fail_connect {
            return Err(Error::ConnectFailed("forced failure".to_string()));
        }
        if self.connect_pending_polls > 0 {
            self.connect_pending_polls -= 1;
            return Ok(Readiness::Pending);
        }
        Ok(Readiness::Ready)
    }

    fn send(&mut self, data: &[u8]) -> Result<usize> {
        self.sent.push(data.to_vec());
        Ok(self.send_accepts.unwrap_or(data.len()).min(data.len()))
    }

    fn poll_recv(&mut self, buf: &mut [u8]) -> Result<RecvEvent> {
        match self.script.pop_front() {
            Some(MockEvent::Data(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    // Caller's buffer was smaller; keep the rest queued.
                    self.script.push_front(MockEvent::Data(bytes[n..].to_vec()));
                }
                Ok(RecvEvent::Data(n))
            }
            Some(MockEvent::Closed) => Ok(RecvEvent::Closed),
            Some(MockEvent::Idle) => Ok(RecvEvent::Idle),
            None => Ok(RecvEvent::Idle),
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
