//! Output sink: write the patched config to a file or stdout.

use crate::error::{Error, Result};
use log::info;
use std::path::Path;

/// Join patched lines back into the final config text.
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

/// Write the updated config to `output_path`, or print it to stdout when
/// no path is given. The template file itself is never modified.
pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, content).map_err(|source| Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Updated configuration written to {}", path.display());
            println!("Updated configuration written to {}", path.display());
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
