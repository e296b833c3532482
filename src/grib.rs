//! Reads and decodes GRIB2 submessages.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use grib::{Grib2SubmessageDecoder, GribError};
use ndarray::{Array1, Array2, ArrayD};

#[derive(Debug, thiserror::Error)]
pub enum GribReadError {
    #[error("failed to open GRIB file {path}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode GRIB file {path}")]
    Decode { path: PathBuf, source: GribError },
    #[error("{path} holds {found} GRIB2 message(s), expected at least {expected}")]
    TooFewMessages {
        path: PathBuf,
        found: usize,
        expected: usize,
    },
    #[error("message {index} of {path} decoded {found} values for a {expected}-point grid")]
    ShapeMismatch {
        path: PathBuf,
        index: usize,
        found: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, GribReadError>;

#[derive(Debug, Clone)]
/// Decoded grid of one submessage.
pub struct GribGrid {
    pub discipline: u8,
    pub parameter_category: Option<u8>,
    pub parameter_number: Option<u8>,
    /// Points along the i (x, longitude) and j (y, latitude) directions, when
    /// the grid template and scanning mode are supported.
    pub grid_shape: Option<(usize, usize)>,
    /// Values laid out `(nj, ni)` whatever the scanning mode, or flat when the
    /// grid cannot be laid out. Rows keep the j direction of the file.
    pub values: ArrayD<f64>,
}

impl GribGrid {
    /// GRIB2 parameter as (discipline, category, number), when the product
    /// definition template exposes it.
    pub fn parameter(&self) -> Option<(u8, u8, u8)> {
        Some((
            self.discipline,
            self.parameter_category?,
            self.parameter_number?,
        ))
    }
}

fn open(path: &Path) -> Result<grib::Grib2<grib::SeekableGrib2Reader<BufReader<File>>>> {
    let file = File::open(path).map_err(|source| GribReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    grib::from_reader(BufReader::new(file)).map_err(|source| GribReadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Number of GRIB2 submessages in the file at `path`.
pub fn message_count(path: &Path) -> Result<usize> {
    Ok(open(path)?.len())
}

/// Decodes the first `count` submessages of the file at `path`, in file order.
///
/// Fails with [`GribReadError::TooFewMessages`] before decoding anything when
/// the file holds fewer than `count` submessages.
pub fn read_leading(path: &Path, count: usize) -> Result<Vec<GribGrid>> {
    let grib2 = open(path)?;

    if grib2.len() < count {
        return Err(GribReadError::TooFewMessages {
            path: path.to_path_buf(),
            found: grib2.len(),
            expected: count,
        });
    }

    let decode_err = |source: GribError| GribReadError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut grids = Vec::with_capacity(count);

    for (index, (message_index, submessage)) in grib2.iter().take(count).enumerate() {
        let discipline = submessage.indicator().discipline;
        let parameter_category = submessage.prod_def().parameter_category();
        let parameter_number = submessage.prod_def().parameter_number();
        let num_points = submessage.grid_def().num_points() as usize;

        let placement = match (submessage.grid_shape(), submessage.ij()) {
            (Ok(shape), Ok(ij)) => Some((shape, ij)),
            (Err(e), _) | (Ok(_), Err(e)) => {
                log::warn!(
                    "Grid of message {:?} in {} cannot be laid out ({}), storing it flat",
                    message_index,
                    path.display(),
                    e
                );
                None
            }
        };
        let grid_shape = placement.as_ref().map(|(shape, _)| *shape);

        log::debug!(
            "Message {:?}: discipline {}, category {:?}, number {:?}, shape {:?}",
            message_index,
            discipline,
            parameter_category,
            parameter_number,
            grid_shape
        );

        let decoder = Grib2SubmessageDecoder::from(submessage).map_err(decode_err)?;
        // bit-mapped decoding can run past the last point into padding bits
        let values: Vec<f64> = decoder
            .dispatch()
            .map_err(decode_err)?
            .take(num_points)
            .map(f64::from)
            .collect();

        if values.len() != num_points {
            return Err(GribReadError::ShapeMismatch {
                path: path.to_path_buf(),
                index,
                found: values.len(),
                expected: num_points,
            });
        }

        let values = match placement {
            Some(((ni, nj), ij)) => {
                let mut grid = Array2::from_elem((nj, ni), f64::NAN);
                for ((i, j), value) in ij.zip(values) {
                    grid[[j, i]] = value;
                }
                grid.into_dyn()
            }
            None => Array1::from(values).into_dyn(),
        };

        grids.push(GribGrid {
            discipline,
            parameter_category,
            parameter_number,
            grid_shape,
            values,
        });
    }

    Ok(grids)
}

// -- Tests -------------------------------------------------------------------
