//! Command line interface.

pub mod command;

use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Converts every GRIB2 file under `$DATA_DIR/data` into pressure, u_hori and
/// u_vert arrays in `$DATA_DIR/npy`.
pub struct Cli {
    /// Root directory holding `data/` (GRIB inputs) and `npy/` (array outputs)
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: PathBuf,
}

/// Loads `KEY=value` pairs from `path` over the process environment.
///
/// Returns `false` when there is no such file.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path_override(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Logger filtered by `RUST_LOG`, `warn` when unset. Build it after
/// [`load_env_file`] so a level set in `.env` applies.
pub fn logger() -> env_logger::Builder {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("##-"),
    )
}

// -- Tests -------------------------------------------------------------------
