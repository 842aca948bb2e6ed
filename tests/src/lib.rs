//! # Ban-Sentry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Workload builders shared with benches/
//! │   └── registry.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── flows.rs      # Client session lifecycle against the registry
//!     └── storage.rs    # Persistence across reopen (rocksdb feature)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bs-tests
//!
//! # Including the RocksDB backend
//! cargo test -p bs-tests --features rocksdb
//!
//! # Benchmarks
//! cargo bench -p bs-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod benchmarks;
pub mod integration;
