// dcnow-rs/dcnow/src/ops/mod.rs

//! Blocking operations executed on the worker thread.

pub mod connect;
pub mod fetch;

pub use connect::bring_up;
pub use fetch::fetch_status;
