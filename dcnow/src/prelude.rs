// dcnow-rs/dcnow/src/prelude.rs

pub use crate::cache::StatusCache;
pub use crate::config::{DialConfig, FetchConfig};
pub use crate::payload::{decode, DecodedStatus};
pub use crate::status::{LogSink, NullSink, StatusSink};
pub use crate::transport::{HttpTransport, LinkTransport, TcpHttpTransport};
pub use crate::worker::{Progress, Worker};
pub use crate::{BoundedString, Error, FetchResult, GameRecord, Result, WorkerState};

// Re-export small utilities for convenience
pub use crate::utils::ms;
