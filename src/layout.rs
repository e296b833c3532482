//! Directory layout under the configured data root.

use std::path::PathBuf;

use crate::Field;

const INPUT_DIR: &str = "data";
const OUTPUT_DIR: &str = "npy";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolves `{root}/data` (GRIB inputs) and `{root}/npy` (array outputs).
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join(INPUT_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// Path of the array file holding `field` for the input `basename`.
    pub fn output_path(&self, field: Field, basename: &str) -> PathBuf {
        self.output_dir().join(field.file_name(basename))
    }
}

// -- Tests -------------------------------------------------------------------
