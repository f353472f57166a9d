//! The AllowedIPs config patcher.
//!
//! Takes the template's lines and a finalized IP set and produces a new
//! line sequence under one of two policies:
//!
//! - **overwrite**: every existing `AllowedIPs =` line is removed and a
//!   single consolidated line takes the position of the first one.
//! - **append**: all existing lines are kept and one new consolidated line
//!   is added as the last entry of the `[Peer]` section. WireGuard clients
//!   concatenate multiple AllowedIPs lines, so repeated append runs
//!   intentionally accumulate lines rather than deduplicating them.
//!
//! The patcher is pure: it builds a fresh line vector and never touches
//! the filesystem. Everything outside `[Section]` headers and
//! `AllowedIPs =` lines passes through byte-for-byte.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

const ALLOWED_IPS_KEY: &str = "AllowedIPs =";
const PEER_HEADER: &str = "[Peer]";

/// Read the template file as a line sequence, terminators preserved.
pub fn read_template_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split_inclusive('\n').map(String::from).collect())
}

/// Build the consolidated `AllowedIPs` line from a sorted IP set.
fn format_allowed_ips_line(allowed_ips: &BTreeSet<String>) -> String {
    let ip_str = allowed_ips
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("AllowedIPs = {ip_str}\n")
}

/// Index of the first line whose trimmed content equals `[Peer]`.
fn find_peer_header(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| line.trim() == PEER_HEADER)
}

/// Patch the template lines with the resolved IP set.
///
/// `allowed_ips` must be non-empty; callers guarantee this because an
/// empty resolution result aborts the run earlier.
pub fn patch_allowed_ips(
    lines: &[String],
    allowed_ips: &BTreeSet<String>,
    overwrite: bool,
) -> Result<Vec<String>> {
    if overwrite {
        patch_overwrite(lines, allowed_ips)
    } else {
        patch_append(lines, allowed_ips)
    }
}

/// Replace all existing AllowedIPs lines with one consolidated line at the
/// position of the first occurrence.
fn patch_overwrite(lines: &[String], allowed_ips: &BTreeSet<String>) -> Result<Vec<String>> {
    let mut output_lines = Vec::with_capacity(lines.len() + 1);
    // Output-sequence position of the first AllowedIPs line, i.e. how many
    // lines had been copied when it was skipped.
    let mut allowed_ips_index = None;

    for line in lines {
        if line.trim().starts_with(ALLOWED_IPS_KEY) {
            if allowed_ips_index.is_none() {
                allowed_ips_index = Some(output_lines.len());
            }
        } else {
            output_lines.push(line.clone());
        }
    }

    let new_line = format_allowed_ips_line(allowed_ips);

    match allowed_ips_index {
        Some(index) => output_lines.insert(index, new_line),
        None => {
            // No existing AllowedIPs line anywhere: anchor on the [Peer]
            // header instead and insert directly below it.
            let peer_index = find_peer_header(&output_lines).ok_or(Error::NoPeerSection)?;
            output_lines.insert(peer_index + 1, new_line);
        }
    }

    Ok(output_lines)
}

/// Keep every existing line and add the new consolidated line as the last
/// entry of the `[Peer]` section.
fn patch_append(lines: &[String], allowed_ips: &BTreeSet<String>) -> Result<Vec<String>> {
    let peer_index = find_peer_header(lines).ok_or(Error::NoPeerSection)?;

    // The insertion boundary is the next section header after [Peer], or
    // end-of-file if the peer section runs to the end.
    let boundary = lines[peer_index + 1..]
        .iter()
        .position(|line| line.trim().starts_with('['))
        .map(|offset| peer_index + 1 + offset)
        .unwrap_or(lines.len());

    let mut output_lines = Vec::with_capacity(lines.len() + 1);
    output_lines.extend_from_slice(&lines[..boundary]);
    output_lines.push(format_allowed_ips_line(allowed_ips));
    output_lines.extend_from_slice(&lines[boundary..]);
    Ok(output_lines)
}
