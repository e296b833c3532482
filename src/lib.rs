//! Converts GRIB2 weather files into NumPy `.npy` arrays, one file per field.

pub mod cli;
pub mod discover;
pub mod field;
pub mod grib;
pub mod layout;
pub mod npy;
pub mod store;

#[cfg(test)]
mod testing;

pub use field::Field;
pub use layout::Layout;
