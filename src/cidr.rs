//! IP-class normalization.
//!
//! Turns a user-supplied class token ("A", "24", "/32", "host", ...) into a
//! validated CIDR suffix that can be appended directly to an IPv4 address.

use crate::error::{Error, Result};
use std::fmt;

/// A validated CIDR suffix of the form `/N` with `0 <= N <= 32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrSuffix(String);

/// Map a class name to its CIDR notation
fn class_to_cidr(class: &str) -> Option<&'static str> {
    match class {
        "A" => Some("/8"),
        "B" => Some("/16"),
        "C" => Some("/24"),
        // Synonym for /32
        "HOST" => Some("/32"),
        _ => None,
    }
}

impl CidrSuffix {
    /// Normalize an IP class token to a validated CIDR suffix.
    ///
    /// Accepts, case-insensitively:
    /// - a suffix already in CIDR form (`/24`)
    /// - a bare numeric value (`24`)
    /// - a class name (`A`, `B`, `C`, `HOST`)
    ///
    /// Any other token fails with [`Error::InvalidIpClass`]; a numeric value
    /// outside `0..=32` fails with [`Error::CidrOutOfRange`].
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim().to_uppercase();

        let cidr = if let Some(stripped) = token.strip_prefix('/') {
            format!("/{stripped}")
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            format!("/{token}")
        } else if let Some(mapped) = class_to_cidr(&token) {
            mapped.to_string()
        } else {
            return Err(Error::InvalidIpClass(token));
        };

        match cidr[1..].parse::<u32>() {
            Ok(n) if n <= 32 => Ok(CidrSuffix(cidr)),
            _ => Err(Error::CidrOutOfRange(cidr)),
        }
    }

    /// The suffix as a string slice, e.g. `"/24"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CidrSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
