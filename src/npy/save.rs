use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use ndarray::{ArrayBase, Data, Dimension};
use npyz::WriterBuilder;

/// Writes `array` to `file_path` as a little-endian `float64` array in C order,
/// replacing any existing file.
pub fn save_array<S, D>(array: &ArrayBase<S, D>, file_path: &Path) -> Result<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let file = File::create(file_path)
        .with_context(|| format!("Failed to create {}", file_path.display()))?;
    let mut buf = BufWriter::new(file);

    write_array(array, &mut buf)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;
    buf.flush()?;

    Ok(())
}

fn write_array<S, D, W>(array: &ArrayBase<S, D>, writer: W) -> std::io::Result<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
    W: Write,
{
    let shape: Vec<u64> = array.shape().iter().map(|&n| n as u64).collect();

    let mut writer = npyz::WriteOptions::<f64>::new()
        .default_dtype()
        .shape(&shape)
        .writer(writer)
        .begin_nd()?;
    // logical iteration order is C order regardless of memory layout
    writer.extend(array.iter().copied())?;
    writer.finish()
}

// -- Tests -------------------------------------------------------------------
