//! Matrix arithmetic: elementwise addition, matrix product and GEMM.
//!
//! Every operation borrows its operands and returns a freshly allocated result.
//! Shape incompatibility (or an absent operand) is not an error here: the
//! operation yields `None`, so callers can chain results without unwrapping,
//! e.g. `gemm` feeds the output of `multiply` straight into `add`.
//!
//! Operands are taken as `impl Into<Option<&DenseMatrix<T>>>`, so both `&a`
//! and `None` are accepted.

use log::{debug, trace};
use num_traits::Num;

use crate::matrix::DenseMatrix;

/// Elementwise sum `A + B`.
///
/// Returns `None` if either operand is absent or the shapes differ.
pub fn add<'a, T: Copy + Num + 'a>(
    a: impl Into<Option<&'a DenseMatrix<T>>>,
    b: impl Into<Option<&'a DenseMatrix<T>>>,
) -> Option<DenseMatrix<T>> {
    let (a, b) = (a.into()?, b.into()?);
    if a.shape() != b.shape() {
        debug!("add: shape mismatch {:?} + {:?}", a.shape(), b.shape());
        return None;
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| x + y)
        .collect();
    trace!("add: allocated {}x{} result", a.rows(), a.cols());
    Some(DenseMatrix::from_parts(a.rows(), a.cols(), data))
}

/// Matrix product `A * B`, with `A` of shape `m x k` and `B` of shape `k x n`.
///
/// Each entry is a dot product accumulated from `T::zero()`. Returns `None`
/// if either operand is absent or `A.cols() != B.rows()`.
pub fn multiply<'a, T: Copy + Num + 'a>(
    a: impl Into<Option<&'a DenseMatrix<T>>>,
    b: impl Into<Option<&'a DenseMatrix<T>>>,
) -> Option<DenseMatrix<T>> {
    let (a, b) = (a.into()?, b.into()?);
    if a.cols() != b.rows() {
        debug!(
            "multiply: inner dimension mismatch {:?} x {:?}",
            a.shape(),
            b.shape()
        );
        return None;
    }
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let len = product_len(m, n)?;
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let mut c = vec![T::zero(); len];
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum = sum + lhs[i * k + p] * rhs[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    trace!("multiply: allocated {}x{} result", m, n);
    Some(DenseMatrix::from_parts(m, n, c))
}

/// Element count of an `m x n` product, `None` if it overflows `usize`.
fn product_len(m: usize, n: usize) -> Option<usize> {
    let len = m.checked_mul(n);
    if len.is_none() {
        debug!("multiply: {}x{} result overflows usize", m, n);
    }
    len
}

/// Fused multiply-add `A * B + C`.
///
/// Equivalent to `add(multiply(a, b).as_ref(), c)`: `None` if any operand is
/// absent or shapes are incompatible at either stage.
pub fn gemm<'a, T: Copy + Num + 'a>(
    a: impl Into<Option<&'a DenseMatrix<T>>>,
    b: impl Into<Option<&'a DenseMatrix<T>>>,
    c: impl Into<Option<&'a DenseMatrix<T>>>,
) -> Option<DenseMatrix<T>> {
    let c = c.into();
    let product = multiply(a, b);
    add(product.as_ref(), c)
}

/// Stateless namespace over the free functions in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixOps;

impl MatrixOps {
    /// See [`add`].
    pub fn add<'a, T: Copy + Num + 'a>(
        a: impl Into<Option<&'a DenseMatrix<T>>>,
        b: impl Into<Option<&'a DenseMatrix<T>>>,
    ) -> Option<DenseMatrix<T>> {
        add(a, b)
    }

    /// See [`multiply`].
    pub fn multiply<'a, T: Copy + Num + 'a>(
        a: impl Into<Option<&'a DenseMatrix<T>>>,
        b: impl Into<Option<&'a DenseMatrix<T>>>,
    ) -> Option<DenseMatrix<T>> {
        multiply(a, b)
    }

    /// See [`gemm`].
    pub fn gemm<'a, T: Copy + Num + 'a>(
        a: impl Into<Option<&'a DenseMatrix<T>>>,
        b: impl Into<Option<&'a DenseMatrix<T>>>,
        c: impl Into<Option<&'a DenseMatrix<T>>>,
    ) -> Option<DenseMatrix<T>> {
        gemm(a, b, c)
    }
}
