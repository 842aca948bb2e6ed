//! # Egress Address Normalization
//!
//! Callers pass proxies as full URLs (`socks5://user:pw@host:1080`) or as
//! bare addresses (`1.2.3.4`, `1.2.3.4:8080`). Bare addresses get an
//! `all://` scheme so both forms go through the same URL parser; the ban
//! key is the host alone.

use super::errors::RegistryError;
use std::borrow::Cow;
use url::{Host, Url};

/// Scheme given to addresses that arrive without one.
pub const DEFAULT_EGRESS_SCHEME: &str = "all";

/// Prefix `all://` to an address that has no `scheme://`.
pub fn normalize_egress(address: &str) -> Cow<'_, str> {
    if address.contains("://") {
        Cow::Borrowed(address)
    } else {
        Cow::Owned(format!("{DEFAULT_EGRESS_SCHEME}://{address}"))
    }
}

/// Extract the host an egress address bans.
///
/// Hostnames are lowercased and IPv6 literals lose their brackets, so
/// `HTTP://[::1]:80` and `[::1]` share one key. A bare IPv6 address must be
/// bracketed; `::1` alone reads as an empty host with a port and is
/// rejected.
///
/// # Errors
///
/// Returns `RegistryError::Validation` if the address does not parse or has
/// no host.
pub fn egress_host(address: &str) -> Result<String, RegistryError> {
    let normalized = normalize_egress(address.trim());
    let url = Url::parse(&normalized).map_err(|e| {
        RegistryError::validation(format!("invalid egress address {address:?}: {e}"))
    })?;

    let host = match url.host() {
        Some(Host::Domain(domain)) => domain.to_ascii_lowercase(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    };

    if host.is_empty() {
        return Err(RegistryError::validation(format!(
            "egress address {address:?} has no host"
        )));
    }
    Ok(host)
}
