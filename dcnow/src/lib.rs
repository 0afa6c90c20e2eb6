// dcnow-rs/dcnow/src/lib.rs

//! dcnow
//!
//! Pure Rust client for the Dreamcast Now live player-count service.
#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod ops;
pub mod payload;
pub mod prelude;
pub mod status;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;
pub mod worker;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
