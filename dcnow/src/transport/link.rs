// dcnow-rs/dcnow/src/transport/link.rs

use crate::Result;

/// Dial-up transport bring-up collaborator.
///
/// Abstracts the modem/PPP stack away from the connect operation. Every
/// method may block; `dial` in particular can block for tens of seconds
/// and cannot be interrupted mid-call, which is why the connect operation
/// only checks cancellation between these coarse steps.
pub trait LinkTransport: Send {
    /// True when a transport is already up and usable (e.g. a broadband
    /// adapter configured at boot, or a previous dial still connected).
    fn already_active(&mut self) -> bool;

    /// Initialize the modem hardware. May take around a second.
    fn init_hardware(&mut self) -> Result<()>;

    /// Initialize the link-layer protocol subsystem.
    fn init_protocol(&mut self) -> Result<()>;

    /// Dial the given number. Blocking and uninterruptible.
    fn dial(&mut self, number: &str, blind: bool) -> Result<()>;

    /// Configure authentication credentials for the link.
    fn set_credentials(&mut self, username: &str, password: &str) -> Result<()>;

    /// Issue the connect request. Link-up is reported asynchronously via
    /// `link_up` polling.
    fn connect(&mut self) -> Result<()>;

    /// Non-blocking check whether the link is up.
    fn link_up(&mut self) -> bool;

    /// Shut down the protocol layer and the hardware. Idempotent.
    fn teardown(&mut self);
}
