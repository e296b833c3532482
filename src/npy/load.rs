use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, Context, Result};
use ndarray::{Array2, ShapeBuilder};
use npyz::{NpyFile, Order};

/// Reads a 2-D `float64` array from `file_path`.
pub fn load_array2(file_path: &Path) -> Result<Array2<f64>> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;
    let npy = NpyFile::new(BufReader::new(file))
        .with_context(|| format!("Failed to read npy header of {}", file_path.display()))?;

    let (rows, cols) = match npy.shape() {
        &[rows, cols] => (rows as usize, cols as usize),
        other => {
            return Err(anyhow!(
                "Expected a 2-D array in {}, found shape {:?}",
                file_path.display(),
                other
            ))
        }
    };
    let fortran = npy.order() == Order::Fortran;
    let data = npy
        .into_vec::<f64>()
        .with_context(|| format!("Failed to read values of {}", file_path.display()))?;

    let array = Array2::from_shape_vec((rows, cols).set_f(fortran), data)?;

    Ok(array)
}

// -- Tests -------------------------------------------------------------------
