//! # Ports
//!
//! - `inbound` - APIs the registry exposes to the client layer
//! - `outbound` - Storage and serialization the host must provide

pub mod inbound;
pub mod outbound;
