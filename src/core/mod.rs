//! Core traits shared by the dense matrix and its faer interop.

pub mod traits;
pub use traits::{MatShape, MatrixGet};
