// Shared support for integration tests.
#![allow(dead_code)]

pub mod fixtures;

pub use dcnow::test_support as helpers;
