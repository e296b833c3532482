//! Finds the GRIB files to convert.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use glob::{glob_with, MatchOptions, Pattern};

/// Returns every regular file below `input_dir`, at any depth, in glob order.
///
/// A missing `input_dir` yields an empty list. Hidden entries are skipped.
pub fn find_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let root = input_dir
        .to_str()
        .ok_or_else(|| anyhow!("Data directory is not valid UTF-8: {:?}", input_dir))?;
    let pattern = format!("{}/**/*", Pattern::escape(root.trim_end_matches('/')));

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        } else {
            log::debug!("Skipping non-file entry {}", path.display());
        }
    }

    Ok(files)
}

/// File name without directory and extension, shared by the three outputs.
pub fn basename(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Cannot derive a basename from {}", path.display()))
}

// -- Tests -------------------------------------------------------------------
