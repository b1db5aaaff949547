//! Block-stacking helpers for assembling dense sensitivity matrices.
//!
//! These are pure functions: they take a slice of blocks, check shapes
//! explicitly, and return a freshly allocated matrix. A shape mismatch is a
//! [`DomainError::ShapeMismatch`], never a panic.

use crate::error::DomainError;
use faer::Mat;

/// Stack blocks side by side into one matrix.
///
/// All blocks must have the same number of rows. An empty slice yields a
/// 0 x 0 matrix.
pub fn hstack(blocks: &[Mat<f64>]) -> Result<Mat<f64>, DomainError> {
    let Some(first) = blocks.first() else {
        return Ok(Mat::zeros(0, 0));
    };

    let nrows = first.nrows();
    let mut ncols = 0;
    for (index, block) in blocks.iter().enumerate() {
        if block.nrows() != nrows {
            return Err(DomainError::ShapeMismatch {
                op: "hstack",
                axis: "rows",
                index,
                expected: nrows,
                got: block.nrows(),
            });
        }
        ncols += block.ncols();
    }

    let mut out = Mat::zeros(nrows, ncols);
    let mut col_offset = 0;
    for block in blocks {
        for j in 0..block.ncols() {
            for i in 0..nrows {
                out[(i, col_offset + j)] = block[(i, j)];
            }
        }
        col_offset += block.ncols();
    }
    Ok(out)
}

/// Stack blocks on top of each other into one matrix.
///
/// All blocks must have the same number of columns. An empty slice yields a
/// 0 x 0 matrix.
pub fn vstack(blocks: &[Mat<f64>]) -> Result<Mat<f64>, DomainError> {
    let Some(first) = blocks.first() else {
        return Ok(Mat::zeros(0, 0));
    };

    let ncols = first.ncols();
    let mut nrows = 0;
    for (index, block) in blocks.iter().enumerate() {
        if block.ncols() != ncols {
            return Err(DomainError::ShapeMismatch {
                op: "vstack",
                axis: "columns",
                index,
                expected: ncols,
                got: block.ncols(),
            });
        }
        nrows += block.nrows();
    }

    let mut out = Mat::zeros(nrows, ncols);
    let mut row_offset = 0;
    for block in blocks {
        for i in 0..block.nrows() {
            for j in 0..ncols {
                out[(row_offset + i, j)] = block[(i, j)];
            }
        }
        row_offset += block.nrows();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(nrows: usize, ncols: usize, value: f64) -> Mat<f64> {
        let mut m = Mat::zeros(nrows, ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                m[(i, j)] = value;
            }
        }
        m
    }

    #[test]
    fn test_hstack_shapes() {
        let a = filled(2, 3, 1.0);
        let b = filled(2, 1, 2.0);
        let m = hstack(&[a, b]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
    }

    #[test]
    fn test_vstack_shapes() {
        let a = filled(1, 2, 1.0);
        let b = filled(3, 2, 2.0);
        let m = vstack(&[a, b]).unwrap();
        assert_eq!(m.nrows(), 4);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(3, 0)], 2.0);
    }

    #[test]
    fn test_hstack_row_mismatch() {
        let a = filled(2, 2, 1.0);
        let b = filled(3, 2, 1.0);
        let err = hstack(&[a, b]).unwrap_err();
        assert!(matches!(
            err,
            DomainError::ShapeMismatch {
                op: "hstack",
                index: 1,
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_vstack_column_mismatch() {
        let a = filled(2, 2, 1.0);
        let b = filled(2, 5, 1.0);
        assert!(vstack(&[a, b]).is_err());
    }

    #[test]
    fn test_empty_stack() {
        let m = hstack(&[]).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (0, 0));
        let m = vstack(&[]).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (0, 0));
    }
}
