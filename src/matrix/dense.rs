//! Dense row-major matrix.
//!
//! `DenseMatrix<T>` owns a single contiguous buffer of `rows * cols` elements.
//! Element `(i, j)` lives at offset `i * cols + j`. Dimensions are fixed at
//! construction; the only mutation paths are `set`, `fill_from` and `IndexMut`.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Num;

use crate::config::FormatOptions;
use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{MatError, RangeViolation, Result};

/// Fixed-size dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Number of elements for a `rows x cols` matrix, rejecting zero or overflowing shapes.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols).ok_or(MatError::InvalidDimension { rows, cols })
}

/// `OutOfRange` for a buffer whose length does not match the shape.
fn length_violation(op: &'static str, expected: usize, got: usize) -> MatError {
    MatError::OutOfRange {
        op,
        reason: RangeViolation::Length { expected, got },
    }
}

impl<T: Copy + Num> DenseMatrix<T> {
    /// Create a `rows x cols` matrix with every element set to zero.
    ///
    /// # Errors
    /// `InvalidDimension` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(DenseMatrix {
            rows,
            cols,
            data: vec![T::zero(); len],
        })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// `InvalidDimension` for a zero dimension, `OutOfRange` if
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(length_violation("from_vec", len, data.len()));
        }
        Ok(DenseMatrix { rows, cols, data })
    }

    /// Build a matrix by evaluating `f(i, j)` for every position in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(DenseMatrix { rows, cols, data })
    }

    /// Square identity matrix of order `n`.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Copy any shaped, readable matrix into a new dense matrix.
    pub fn from_source<M>(src: &M) -> Result<Self>
    where
        M: MatShape + MatrixGet<T>,
    {
        Self::from_fn(src.nrows(), src.ncols(), |i, j| src.element(i, j))
    }

    /// Element at `(row, col)`.
    ///
    /// # Errors
    /// `OutOfRange` if `row >= rows()` or `col >= cols()`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset("get", row, col)?;
        Ok(self.data[idx])
    }

    /// Overwrite the element at `(row, col)` with `value`.
    ///
    /// # Errors
    /// `OutOfRange` if `row >= rows()` or `col >= cols()`; the matrix is left untouched.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset("set", row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Overwrite the whole buffer from a row-major sequence: `source[i * cols + j]` goes to `(i, j)`.
    ///
    /// # Errors
    /// `OutOfRange` if `source.len() != rows * cols`;
    /// the matrix is left untouched.
    pub fn fill_from(&mut self, source: &[T]) -> Result<()> {
        if source.len() != self.data.len() {
            return Err(length_violation("fill_from", self.data.len(), source.len()));
        }
        self.data.copy_from_slice(source);
        Ok(())
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        if i >= self.rows {
            return Err(self.index_violation("row", i, 0));
        }
        let start = i * self.cols;
        Ok(&self.data[start..start + self.cols])
    }
}

impl<T> DenseMatrix<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements, always `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: both dimensions are positive.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Wrap an already shape-checked buffer. Callers guarantee
    /// `rows > 0`, `cols > 0` and `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        DenseMatrix { rows, cols, data }
    }

    fn index_violation(&self, op: &'static str, row: usize, col: usize) -> MatError {
        MatError::OutOfRange {
            op,
            reason: RangeViolation::Index {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            },
        }
    }

    fn offset(&self, op: &'static str, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(self.index_violation(op, row, col));
        }
        Ok(row * self.cols + col)
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T: Copy> MatrixGet<T> for DenseMatrix<T> {
    fn element(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Unchecked-by-`Result` indexing.
///
/// # Panics
/// Panics if `(i, j)` is out of range; use `get`/`set` for the checked path.
impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

/// Borrowed renderer returned by `DenseMatrix::display_with`.
pub struct DisplayMatrix<'a, T> {
    matrix: &'a DenseMatrix<T>,
    opts: &'a FormatOptions,
}

impl<T> DenseMatrix<T> {
    /// Render with explicit options, one line per row.
    pub fn display_with<'a>(&'a self, opts: &'a FormatOptions) -> DisplayMatrix<'a, T> {
        DisplayMatrix { matrix: self, opts }
    }
}

impl<T: fmt::Display> fmt::Display for DisplayMatrix<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.matrix;
        for (i, row) in m.data.chunks(m.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "{}", self.opts.separator)?;
                }
                match self.opts.precision {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = FormatOptions::default();
        write!(f, "{}", self.display_with(&opts))
    }
}
