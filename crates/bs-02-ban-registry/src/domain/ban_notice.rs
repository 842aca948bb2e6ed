//! # Ban Notice Parsing
//!
//! The service reports a ban as `"<kind>_<duration>_<reason>"`. Only the
//! first two `_` separate fields; the reason may contain more. When the
//! service names the offending user it appends it in parentheses:
//!
//! ```text
//! temp_3600_Spamming comments (SomeUser)
//! ```

use super::errors::BanNoticeError;

/// A ban notice split into its three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BanNotice<'a> {
    /// First field (ban kind, opaque).
    pub kind: &'a str,
    /// Second field (duration, opaque and not interpreted).
    pub duration: &'a str,
    /// Reason text with trailing whitespace removed.
    pub reason: &'a str,
}

impl<'a> BanNotice<'a> {
    /// Split a raw notice on its first two `_`.
    pub fn parse(raw: &'a str) -> Result<Self, BanNoticeError> {
        let mut fields = raw.splitn(3, '_');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(kind), Some(duration), Some(reason)) => Ok(Self {
                kind,
                duration,
                reason: reason.trim_end(),
            }),
            _ => Err(BanNoticeError::MissingSeparators {
                found: raw.matches('_').count(),
            }),
        }
    }

    /// The user in the trailing parentheses of the reason, if any.
    ///
    /// Takes the text between the last `(` and the final `)`, which may be
    /// empty.
    pub fn attributed_user(&self) -> Option<&'a str> {
        let body = self.reason.strip_suffix(')')?;
        let open = body.rfind('(')?;
        Some(&body[open + 1..])
    }
}

/// Parse `raw` and return the attributed user.
///
/// # Errors
///
/// Returns `BanNoticeError::MissingSeparators` when `raw` has fewer than
/// two `_`.
pub fn extract_attributed_user(raw: &str) -> Result<Option<String>, BanNoticeError> {
    Ok(BanNotice::parse(raw)?.attributed_user().map(str::to_owned))
}
