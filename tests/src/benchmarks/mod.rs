//! # Ban-Sentry Benchmarks
//!
//! Workload builders shared by the criterion benches.

pub mod registry;
