//! Matrix module: the dense row-major matrix and its Faer conversions.

pub mod dense;
pub use dense::{DenseMatrix, DisplayMatrix};
pub mod faer_interop;
