//! Converts every GRIB file under the data root into three `.npy` arrays.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use crate::{
    cli::create_progress_bar,
    discover::{basename, find_input_files},
    grib::{self, GribGrid},
    npy::save_array,
    Field, Layout,
};

/// Converts all input files in enumeration order and returns the paths written.
///
/// Stops at the first file that cannot be read, decoded or written; outputs of
/// files converted before it are left in place.
pub fn convert(layout: &Layout) -> Result<Vec<PathBuf>> {
    let input_dir = layout.input_dir();
    let files = find_input_files(&input_dir)?;
    log::info!("Found {} input file(s) under {}", files.len(), input_dir.display());

    let pb = create_progress_bar(files.len() as u64, "Converting GRIB files".to_string());
    let mut written = Vec::with_capacity(files.len() * Field::ALL.len());

    for file in &files {
        let paths = convert_file(layout, file, &pb)
            .with_context(|| format!("Failed to convert {}", file.display()))?;
        written.extend(paths);
        pb.inc(1);
    }

    pb.finish_with_message("GRIB files converted");

    Ok(written)
}

fn convert_file(layout: &Layout, file: &Path, pb: &ProgressBar) -> Result<Vec<PathBuf>> {
    let basename = basename(file)?;
    pb.suspend(|| println!("{}", basename));

    let grids = grib::read_leading(file, Field::ALL.len())?;

    for (field, parameter) in unexpected_parameters(&grids) {
        match parameter {
            Some(p) => log::warn!(
                "Message {} of {} carries parameter {:?}, not {}; converting it as {} anyway",
                field.slot(),
                file.display(),
                p,
                field,
                field
            ),
            None => log::warn!(
                "Message {} of {} has no parameter ids; cannot confirm it holds {}",
                field.slot(),
                file.display(),
                field
            ),
        }
    }

    let mut written = Vec::with_capacity(Field::WRITE_ORDER.len());
    for field in Field::WRITE_ORDER {
        let path = layout.output_path(field, &basename);
        save_array(&grids[field.slot()].values, &path)?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Fields whose message does not carry the expected GRIB2 parameter, with the
/// parameter actually found.
fn unexpected_parameters(grids: &[GribGrid]) -> Vec<(Field, Option<(u8, u8, u8)>)> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            let parameter = grids.get(field.slot())?.parameter();
            match parameter {
                Some((d, c, n)) if field.matches_parameter(d, c, n) => None,
                _ => Some((field, parameter)),
            }
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------
