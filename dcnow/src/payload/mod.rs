// dcnow-rs/dcnow/src/payload/mod.rs

pub mod decoder;
pub mod scan;

pub use decoder::{decode, DecodedStatus};
