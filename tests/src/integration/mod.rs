//! # Integration Tests
//!
//! Flows spanning the checksum, registry and telemetry crates.

pub mod flows;
pub mod storage;
