//! DNS resolution and IP-set building.
//!
//! Resolution is a collaborator boundary: the [`Resolve`] trait keeps the
//! set-building logic testable without touching the network. Per-domain
//! failures are logged and skipped; only an entirely empty result set is
//! fatal.

use crate::cidr::CidrSuffix;
use crate::domains::DomainSpec;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr};

/// Resolves a domain name to its IPv4 addresses.
pub trait Resolve {
    fn resolve_ipv4(&self, domain: &str) -> std::io::Result<Vec<Ipv4Addr>>;
}

/// Production resolver backed by the system's name resolution.
pub struct SystemResolver;

impl Resolve for SystemResolver {
    fn resolve_ipv4(&self, domain: &str) -> std::io::Result<Vec<Ipv4Addr>> {
        let addrs = dns_lookup::lookup_host(domain)?;
        Ok(addrs
            .into_iter()
            .filter_map(|addr| match addr {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .collect())
    }
}

/// Resolve every domain spec and accumulate `"<address><cidr>"` strings.
///
/// Each entry uses its own CIDR override when present, else the global
/// default. Deduplication is by exact formatted string, and the returned
/// set iterates in lexicographic order.
///
/// Domains that fail to resolve are logged to the error stream and
/// skipped. If no domain yields any address the whole run is considered
/// failed ([`Error::NoIpsResolved`]).
pub fn build_ip_set<R: Resolve>(
    resolver: &R,
    specs: &[DomainSpec],
    default_cidr: &CidrSuffix,
) -> Result<BTreeSet<String>> {
    let mut resolved_ips = BTreeSet::new();

    for spec in specs {
        let cidr = spec.cidr_override.as_ref().unwrap_or(default_cidr);
        match resolver.resolve_ipv4(&spec.domain) {
            Ok(addrs) => {
                for addr in addrs {
                    debug!("Resolved {} -> {}", spec.domain, addr);
                    resolved_ips.insert(format!("{addr}{cidr}"));
                }
            }
            Err(e) => {
                warn!("Failed to resolve domain {}: {}", spec.domain, e);
            }
        }
    }

    if resolved_ips.is_empty() {
        return Err(Error::NoIpsResolved);
    }
    Ok(resolved_ips)
}
