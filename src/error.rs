//! Error types for wgresolve.
//!
//! Library code returns these instead of exiting the process; the binary's
//! `main` is the single place that turns a fatal error into a non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid IP class: {0}. Use 'A', 'B', 'C', 'HOST', '/32', or numeric values")]
    InvalidIpClass(String),

    #[error("Invalid CIDR notation: {0}. Must be between /0 and /32")]
    CidrOutOfRange(String),

    #[error("No IPs resolved")]
    NoIpsResolved,

    #[error("No [Peer] section found in template")]
    NoPeerSection,

    #[error("Error reading template file {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading domain file {path}: {source}")]
    DomainFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
