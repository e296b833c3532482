//! Loads converted fields back by analysis time.
//!
//! Input files are expected to be named after their analysis time as
//! `YYYYMMDDHH`, so the fields of one time live in
//! `npy/{prefix}_{YYYYMMDDHH}.npy`.

use std::{collections::HashMap, path::PathBuf};

use chrono::{DateTime, Utc};
use ndarray::Array2;

use crate::{npy::load_array2, Field, Layout};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no {field} file for {time} at {path}")]
    Missing {
        field: Field,
        time: DateTime<Utc>,
        path: PathBuf,
    },
    #[error("failed to load {field} for {time} from {path}")]
    Load {
        field: Field,
        time: DateTime<Utc>,
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Fields = HashMap<(DateTime<Utc>, Field), Array2<f64>>;

/// Basename of the input file holding the analysis at `time`.
pub fn basename_for(time: &DateTime<Utc>) -> String {
    time.format("%Y%m%d%H").to_string()
}

/// Loads the three fields of every requested time from the output directory.
pub fn load_fields(layout: &Layout, times: &[DateTime<Utc>]) -> Result<Fields, StoreError> {
    let mut fields = HashMap::with_capacity(times.len() * Field::ALL.len());

    for time in times {
        let basename = basename_for(time);

        for field in Field::ALL {
            let path = layout.output_path(field, &basename);
            if !path.is_file() {
                return Err(StoreError::Missing {
                    field,
                    time: *time,
                    path,
                });
            }

            let grid = load_array2(&path).map_err(|source| StoreError::Load {
                field,
                time: *time,
                path: path.clone(),
                source: source.into(),
            })?;
            fields.insert((*time, field), grid);
        }
    }

    Ok(fields)
}

// -- Tests -------------------------------------------------------------------
