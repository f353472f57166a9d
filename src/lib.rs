//! # wgresolve - Resolve domains into a WireGuard config's AllowedIPs
//!
//! This library backs a one-shot batch utility: it resolves a set of domain
//! names to IPv4 addresses, formats the results as CIDR blocks, and patches
//! them into the `AllowedIPs` field of a WireGuard-style configuration file.
//!
//! ## Overview
//!
//! Input domains come from either a list file (one `domain[,cidr]` entry per
//! line) or a single inline domain/URL string. Each resolved address is
//! formatted as `<ipv4>/<N>` using a per-entry CIDR override or the global
//! default class, deduplicated by exact string, and merged into the template
//! under one of two policies:
//!
//! - **append** (default): a new consolidated `AllowedIPs` line is added as
//!   the last entry of the `[Peer]` section, keeping any existing lines
//!   (WireGuard clients concatenate multiple `AllowedIPs` lines).
//! - **overwrite**: every existing `AllowedIPs` line is replaced by a single
//!   consolidated line at the position of the first one.
//!
//! The template file is never modified in place; the result goes to a new
//! output file or to stdout.
//!
//! ## Architecture
//!
//! - `cidr`: IP-class tokens (`A`/`B`/`C`/`HOST`, numeric, `/N`) normalized
//!   into validated CIDR suffixes
//! - `domains`: domain-list parsing and URL host extraction
//! - `resolver`: DNS resolution boundary and IP-set building
//! - `patcher`: the config-patching core (overwrite/append policies)
//! - `output`: file or stdout sink
//! - `error`: typed errors returned up to the binary's top-level handler
//!
//! ## Error Handling
//!
//! Library functions return `Result<T, error::Error>`; the binary reports
//! fatal errors through `color_eyre` and exits non-zero. Individual DNS
//! failures are logged and skipped, never fatal on their own.

pub mod cidr;
pub mod domains;
pub mod error;
pub mod output;
pub mod patcher;
pub mod resolver;
