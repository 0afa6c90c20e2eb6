// dcnow-rs/dcnow/src/transport/mod.rs

pub mod http;
pub mod link;
pub mod mock;
pub mod tcp;

pub use http::{HttpTransport, Readiness, RecvEvent};
pub use link::LinkTransport;
pub use tcp::TcpHttpTransport;
