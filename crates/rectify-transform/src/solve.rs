//! Dense linear system solver
//!
//! Gauss-Jordan elimination with partial pivoting over a fixed-size
//! augmented matrix. Every pivot column is eliminated from all other rows,
//! above and below, so the solution can be read straight off the last
//! column once the loop finishes.

use crate::{TransformError, TransformResult};
use tracing::debug;

/// Pivots with a magnitude below this value are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Solve `a * x = b` for `x`.
///
/// At each column the row with the largest absolute value in that column,
/// among the pivot row and the rows below it, becomes the pivot row. Ties
/// keep the earliest row.
///
/// # Errors
///
/// Returns [`TransformError::Singular`] if a pivot magnitude falls below
/// [`PIVOT_TOLERANCE`].
///
/// # Examples
///
/// ```
/// use rectify_transform::solve_linear_system;
///
/// let a = [[2.0, 1.0], [1.0, 3.0]];
/// let x = solve_linear_system(a, [3.0, 5.0]).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
pub fn solve_linear_system<const N: usize>(
    a: [[f64; N]; N],
    b: [f64; N],
) -> TransformResult<[f64; N]> {
    // Augmented matrix [A | b]; column N holds the right-hand side.
    let mut m: [Vec<f64>; N] = std::array::from_fn(|r| {
        let mut row = Vec::with_capacity(N + 1);
        row.extend_from_slice(&a[r]);
        row.push(b[r]);
        row
    });

    for col in 0..N {
        let mut piv = col;
        for r in col + 1..N {
            if m[r][col].abs() > m[piv][col].abs() {
                piv = r;
            }
        }
        let pivot = m[piv][col];
        if pivot.abs() < PIVOT_TOLERANCE {
            debug!(col, pivot, "singular pivot");
            return Err(TransformError::Singular);
        }
        m.swap(col, piv);

        for c in col..=N {
            m[col][c] /= pivot;
        }

        let (above, rest) = m.split_at_mut(col);
        let (pivot_row, below) = rest.split_at_mut(1);
        let pivot_row = &pivot_row[0];
        for row in above.iter_mut().chain(below.iter_mut()) {
            let f = row[col];
            for c in col..=N {
                row[c] -= f * pivot_row[c];
            }
        }
    }

    Ok(std::array::from_fn(|r| m[r][N]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let mut a = [[0.0; 4]; 4];
        for (i, row) in a.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        let x = solve_linear_system(a, [1.0, -2.0, 3.5, 0.0]).unwrap();
        assert_eq!(x, [1.0, -2.0, 3.5, 0.0]);
    }

    #[test]
    fn test_requires_row_swap() {
        // Zero on the leading diagonal entry forces a pivot swap.
        let a = [[0.0, 1.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 4.0]];
        let x = solve_linear_system(a, [3.0, 4.0, 8.0]).unwrap();
        assert_eq!(x, [2.0, 3.0, 2.0]);
    }

    #[test]
    fn test_general_3x3() {
        let a = [[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let x = solve_linear_system(a, [8.0, -11.0, -3.0]).unwrap();
        let expected = [2.0, 3.0, -1.0];
        for (got, want) in x.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    #[test]
    fn test_singular_dependent_rows() {
        let a = [[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(
            solve_linear_system(a, [3.0, 6.0]),
            Err(TransformError::Singular)
        );
    }

    #[test]
    fn test_singular_zero_column() {
        let a = [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(
            solve_linear_system(a, [1.0, 1.0, 1.0]),
            Err(TransformError::Singular)
        );
    }

    #[test]
    fn test_tiny_pivot_is_singular() {
        let a = [[1e-13, 0.0], [0.0, 1.0]];
        assert_eq!(
            solve_linear_system(a, [1.0, 1.0]),
            Err(TransformError::Singular)
        );
        // Just above the tolerance still solves.
        let a = [[2e-12, 0.0], [0.0, 1.0]];
        assert!(solve_linear_system(a, [1.0, 1.0]).is_ok());
    }

    #[test]
    fn test_residual_8x8() {
        let mut a = [[0.0; 8]; 8];
        for (r, row) in a.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = ((r * 7 + c * 3) % 11) as f64 - 5.0 + if r == c { 20.0 } else { 0.0 };
            }
        }
        let b = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let x = solve_linear_system(a, b).unwrap();
        for r in 0..8 {
            let lhs: f64 = (0..8).map(|c| a[r][c] * x[c]).sum();
            assert!((lhs - b[r]).abs() < 1e-10);
        }
    }
}
