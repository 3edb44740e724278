//! rowmat: dense row-major matrices with checked access and GEMM
//!
//! This crate provides a fixed-size `DenseMatrix<T>` over any `num_traits::Num`
//! element type, with bounds-checked element access, bulk population from a
//! flat row-major buffer, and the arithmetic operations `add`, `multiply` and
//! `gemm` (A×B+C).
//!
//! Element access and construction fail with a typed [`MatError`]. Arithmetic
//! on incompatible shapes yields `None` instead.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use ops::{MatrixOps, add, gemm, multiply};
