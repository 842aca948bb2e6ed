//! # Domain Layer
//!
//! Pure types and parsing for the ban registry. No storage access here.
//!
//! ## Modules
//!
//! - `entities` - Account, Ban, CredentialSecret
//! - `ban_notice` - Ban notice parsing and user attribution
//! - `egress` - Proxy address normalization
//! - `keys` - Key layout of the logical schema
//! - `config` - Registry configuration
//! - `errors` - Domain error types

pub mod ban_notice;
pub mod config;
pub mod egress;
pub mod entities;
pub mod errors;
pub mod keys;
