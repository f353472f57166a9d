//! Domain-list input reading.
//!
//! The `domains` argument is either a path to a list file (one entry per
//! line, `domain[,cidr]`, `#`/`//` comments allowed) or a single inline
//! specification. URL-style entries have their host component extracted.

use crate::cidr::CidrSuffix;
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use url::Url;

/// One domain to resolve, with an optional per-entry CIDR override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSpec {
    pub domain: String,
    pub cidr_override: Option<CidrSuffix>,
}

impl DomainSpec {
    /// Parse a raw `domain[,cidr]` line into a spec.
    ///
    /// The optional CIDR part goes through the same normalization as the
    /// global default class, so an invalid override is a fatal
    /// configuration error rather than a silently malformed output entry.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.splitn(2, ',');
        let raw_domain = parts.next().unwrap_or("").trim();
        let cidr_override = match parts.next() {
            Some(cidr) => Some(CidrSuffix::parse(cidr)?),
            None => None,
        };

        Ok(DomainSpec {
            domain: extract_domain(raw_domain),
            cidr_override,
        })
    }
}

/// Extract the host from a URL, or return the input unchanged if it is
/// already a bare domain.
fn extract_domain(url_or_domain: &str) -> String {
    if !url_or_domain.contains("://") {
        return url_or_domain.to_string();
    }
    match Url::parse(url_or_domain) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => url_or_domain.to_string(),
        },
        Err(_) => url_or_domain.to_string(),
    }
}

/// Read domain specifications from a list file.
///
/// Strips whitespace, skips empty lines and lines starting with `#` or
/// `//`, and parses every remaining line as `domain[,cidr]`.
pub fn read_domains_from_file(path: &Path) -> Result<Vec<DomainSpec>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::DomainFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut specs = Vec::new();
    for line in content.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') || stripped.starts_with("//") {
            continue;
        }
        debug!("Parsed domain entry: {}", stripped);
        specs.push(DomainSpec::parse(stripped)?);
    }
    Ok(specs)
}

/// Interpret the `domains` CLI argument: an existing file is read as a
/// domain list, anything else is treated as a single inline specification.
pub fn load_domain_specs(arg: &str) -> Result<Vec<DomainSpec>> {
    let path = Path::new(arg);
    if path.is_file() {
        read_domains_from_file(path)
    } else {
        Ok(vec![DomainSpec::parse(arg)?])
    }
}
