use std::path::Path;

use anyhow::{Error, Result};
use clap::Parser;
use grib2npy::{
    cli::{self, command, Cli},
    Layout,
};

fn main() -> Result<(), Error> {
    let dotenv = cli::load_env_file(Path::new(".env"));
    cli::logger().init();

    match dotenv {
        Ok(true) => log::debug!("Loaded environment from .env"),
        Ok(false) => {}
        Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
    }

    let cli = Cli::parse();
    let layout = Layout::new(cli.data_dir);

    let written = command::convert(&layout)?;
    println!(
        "{} file(s) written to `{}`",
        written.len(),
        layout.output_dir().display()
    );

    Ok(())
}
