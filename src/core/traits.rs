//! Core matrix traits for rowmat.

/// Fixed shape of a two-dimensional matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Unchecked element read: A[i, j].
pub trait MatrixGet<T> {
    /// Element at `(i, j)`. Callers keep `i < nrows()` and `j < ncols()`.
    fn element(&self, i: usize, j: usize) -> T;
}
