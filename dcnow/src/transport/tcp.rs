// dcnow-rs/dcnow/src/transport/tcp.rs

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::constants::POLL_TICK_MS;
use crate::transport::http::{HttpTransport, Readiness, RecvEvent};
use crate::{Error, Result};

/// `HttpTransport` over a std `TcpStream`.
///
/// Connection attempts are chopped into per-tick `connect_timeout` calls
/// so the operation's loop stays in control of the overall deadline and
/// cancellation; once connected the stream is switched to non-blocking so
/// `poll_recv` maps `WouldBlock` to `Idle`.
#[derive(Debug, Default)]
pub struct TcpHttpTransport {
    addr: Option<SocketAddr>,
    stream: Option<TcpStream>,
    connect_tick: Option<Duration>,
}

impl TcpHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-attempt connect slice (defaults to the poll tick).
    pub fn with_connect_tick(mut self, tick: Duration) -> Self {
        self.connect_tick = Some(tick);
        self
    }

    fn connect_tick(&self) -> Duration {
        self.connect_tick
            .unwrap_or(Duration::from_millis(POLL_TICK_MS))
    }
}

impl HttpTransport for TcpHttpTransport {
    fn open(&mut self, host: &str, port: u16) -> Result<()> {
        self.stream = None;
        let mut addrs = (host, port)
            .to_socket_addrs()
            .map_err(|e| Error::Resolution(e.to_string()))?;
        match addrs.next() {
            Some(addr) => {
                self.addr = Some(addr);
                Ok(())
            }
            None => Err(Error::Resolution(format!("no addresses for {host}"))),
        }
    }

    fn poll_connected(&mut self) -> Result<Readiness> {
        if self.stream.is_some() {
            return Ok(Readiness::Ready);
        }
        let addr = self.addr.ok_or_else(|| Error::Socket("not open".to_string()))?;
        match TcpStream::connect_timeout(&addr, self.connect_tick()) {
            Ok(stream) => {
                stream
                    .set_nonblocking(true)
                    .map_err(|e| Error::Socket(e.to_string()))?;
                self.stream = Some(stream);
                Ok(Readiness::Ready)
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(Readiness::Pending),
            Err(e) => Err(Error::ConnectFailed(e.to_string())),
        }
    }

    fn send(&mut self, data: &[u8]) -> Result<usize> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| Error::Socket("not connected".to_string()))?;
        match stream.write(data) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(0),
            Err(_) => Err(Error::SendFailed),
        }
    }

    fn poll_recv(&mut self, buf: &mut [u8]) -> Result<RecvEvent> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| Error::Socket("not connected".to_string()))?;
        match stream.read(buf) {
            Ok(0) => Ok(RecvEvent::Closed),
            Ok(n) => Ok(RecvEvent::Data(n)),
            Err(e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::Interrupted =>
            {
                Ok(RecvEvent::Idle)
            }
            Err(_) => Err(Error::ReceiveFailed),
        }
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}
