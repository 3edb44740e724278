//! Tests for dense matrix construction, checked element access and bulk fill.
//!
//! These tests exercise the public `DenseMatrix` API over random shapes and
//! values, checking that dimensions are fixed at construction, that every
//! in-range write is read back unchanged, and that out-of-range access fails
//! with the typed error rather than panicking.

use rand::Rng;
use rowmat::{DenseMatrix, MatError, RangeViolation};

/// Construction reports the requested dimensions for a spread of random shapes.
#[test]
fn construct_reports_dimensions() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let rows = rng.gen_range(1..16);
        let cols = rng.gen_range(1..16);
        let m = DenseMatrix::<f64>::new(rows, cols).unwrap();
        assert_eq!(m.rows(), rows);
        assert_eq!(m.cols(), cols);
        assert_eq!(m.len(), rows * cols);
    }
}

/// Any zero dimension is an `InvalidDimension`, never a panic.
#[test]
fn construct_rejects_zero_dimensions() {
    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let err = DenseMatrix::<i32>::new(rows, cols).unwrap_err();
        assert_eq!(err, MatError::InvalidDimension { rows, cols });
    }
    assert!(matches!(
        DenseMatrix::<i32>::from_vec(0, 2, vec![]),
        Err(MatError::InvalidDimension { .. })
    ));
}

/// Every in-range write is read back, and writes do not disturb other cells.
#[test]
fn set_get_every_cell() {
    let mut rng = rand::thread_rng();
    let (rows, cols) = (4, 7);
    let mut m = DenseMatrix::<i64>::new(rows, cols).unwrap();
    let mut expected = vec![0i64; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            let v: i64 = rng.gen_range(-1000..1000);
            m.set(i, j, v).unwrap();
            expected[i * cols + j] = v;
        }
    }
    for i in 0..rows {
        for j in 0..cols {
            assert_eq!(m.get(i, j).unwrap(), expected[i * cols + j]);
        }
    }
    assert_eq!(m.as_slice(), expected.as_slice());
}

/// Reads and writes past either bound fail with `OutOfRange`.
#[test]
fn access_out_of_range() {
    let mut m = DenseMatrix::<f32>::new(3, 2).unwrap();
    for (i, j) in [(3, 0), (0, 2), (3, 2), (usize::MAX, 0)] {
        assert!(matches!(m.get(i, j), Err(MatError::OutOfRange { .. })));
        assert!(matches!(m.set(i, j, 1.0), Err(MatError::OutOfRange { .. })));
    }
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
    assert!(m.row(3).is_err());
}

/// `fill_from` maps `seq[i * cols + j]` to `(i, j)`; a wrong length is rejected.
#[test]
fn fill_from_sequence() {
    let (rows, cols) = (3, 4);
    let seq: Vec<i32> = (0..(rows * cols) as i32).map(|v| v * 10).collect();
    let mut m = DenseMatrix::new(rows, cols).unwrap();
    m.fill_from(&seq).unwrap();
    for i in 0..rows {
        for j in 0..cols {
            assert_eq!(m.get(i, j).unwrap(), seq[i * cols + j]);
        }
    }

    let short = &seq[..seq.len() - 1];
    let err = m.fill_from(short).unwrap_err();
    assert_eq!(
        err,
        MatError::OutOfRange {
            op: "fill_from",
            reason: RangeViolation::Length {
                expected: 12,
                got: 11,
            },
        }
    );
    let mut long = seq.clone();
    long.push(0);
    assert!(matches!(m.fill_from(&long), Err(MatError::OutOfRange { .. })));
    assert_eq!(m.as_slice(), seq.as_slice());
}

/// Building from a wrong-length buffer is an `OutOfRange` failure too.
#[test]
fn from_vec_length_mismatch_is_out_of_range() {
    let err = DenseMatrix::from_vec(2, 2, vec![1]).unwrap_err();
    assert!(matches!(err, MatError::OutOfRange { op: "from_vec", .. }));
    assert_eq!(err.to_string(), "from_vec: expected 4 elements, got 1");
}

/// Errors render a readable message.
#[test]
fn error_messages() {
    let m = DenseMatrix::<f64>::new(2, 2).unwrap();
    let err = m.get(2, 0).unwrap_err();
    assert_eq!(err.to_string(), "get: index (2, 0) out of range for 2x2 matrix");
    let err = DenseMatrix::<f64>::new(0, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid matrix dimensions 0x1 (both must be positive)"
    );
}
