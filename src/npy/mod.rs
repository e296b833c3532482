//! Handles serialising and loading grids in the NumPy _npy_ file format.

pub mod load;
pub mod save;

pub use load::load_array2;
pub use save::save_array;
