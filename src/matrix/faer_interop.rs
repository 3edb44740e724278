//! Conversions between `DenseMatrix` and Faer's column-major `Mat<T>`.

use faer::Mat;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::Result;
use crate::matrix::DenseMatrix;

impl<T: Copy + num_traits::Float> MatrixGet<T> for Mat<T> {
    fn element(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy + num_traits::Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Copy + num_traits::Float> DenseMatrix<T> {
    /// Copy into a Faer matrix (row-major to column-major).
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)])
    }

    /// Copy out of a Faer matrix.
    ///
    /// # Errors
    /// `InvalidDimension` if `m` has a zero dimension.
    pub fn from_faer(m: &Mat<T>) -> Result<Self> {
        Self::from_source(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faer_layout_preserved() {
        let a = DenseMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let f = a.to_faer();
        assert_eq!(f.nrows(), 2);
        assert_eq!(f.ncols(), 3);
        assert_eq!(f[(1, 0)], 4.0);
        assert_eq!(f[(0, 2)], 3.0);
        assert_eq!(DenseMatrix::from_faer(&f).unwrap(), a);
    }

    #[test]
    fn empty_faer_rejected() {
        let f = Mat::<f64>::zeros(0, 4);
        assert!(DenseMatrix::from_faer(&f).is_err());
    }
}
