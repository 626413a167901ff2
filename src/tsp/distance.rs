//! Pairwise distance matrix.

use crate::error::{GaError, Result};

/// Symmetric N×N table of Euclidean distances between points.
///
/// Stored row-major. Built once by [`build_distance_matrix`] and read-only
/// afterwards; `get(i, i)` is exactly `0.0` and `get(i, j) == get(j, i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of points (rows and columns).
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Distance between the 0-based points `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "matrix index out of range");
        self.data[i * self.n + j]
    }
}

/// Builds the complete-graph distance matrix from coordinate sequences.
///
/// Entry `(i, j)` is `sqrt((x_i - x_j)^2 + (y_i - y_j)^2)`, evaluated with
/// [`f64::hypot`] so large coordinates do not overflow in the squares. Each
/// unordered pair is computed once and mirrored, so the result is symmetric
/// and its diagonal is zero.
///
/// # Errors
/// - [`GaError::SizeMismatch`] if `xs` and `ys` differ in length
/// - [`GaError::Input`] if a coordinate is not finite, or two points are so
///   far apart that their distance is not representable
pub fn build_distance_matrix(xs: &[f64], ys: &[f64]) -> Result<DistanceMatrix> {
    if xs.len() != ys.len() {
        return Err(GaError::size_mismatch("coordinates", xs.len(), ys.len()));
    }
    for (k, (x, y)) in xs.iter().zip(ys).enumerate() {
        if !(x.is_finite() && y.is_finite()) {
            return Err(GaError::input(format!(
                "point {} has non-finite coordinates ({x}, {y})",
                k + 1
            )));
        }
    }

    let n = xs.len();
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (xs[i] - xs[j]).hypot(ys[i] - ys[j]);
            if !d.is_finite() {
                return Err(GaError::input(format!(
                    "distance between points {} and {} overflows",
                    i + 1,
                    j + 1
                )));
            }
            data[i * n + j] = d;
            data[j * n + i] = d;
        }
    }

    Ok(DistanceMatrix { n, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_distances() {
        let m = build_distance_matrix(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(m.dimension(), 4);
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 2f64.sqrt()).abs() < 1e-12);
        assert!((m.get(1, 3) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_with_zero_diagonal() {
        let xs = [3.5, -1.0, 7.25, 0.0, 12.0, 4.4];
        let ys = [0.5, 9.0, -3.0, 2.0, 6.5, 4.4];
        let m = build_distance_matrix(&xs, &ys).unwrap();

        for i in 0..xs.len() {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..xs.len() {
                assert_eq!(m.get(i, j), m.get(j, i));
                assert!(m.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_large_coordinates_stay_finite() {
        let m = build_distance_matrix(&[1e200, 0.0], &[0.0, 0.0]).unwrap();
        assert_eq!(m.get(0, 1), 1e200);
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                build_distance_matrix(&[0.0, bad, 1.0], &[0.0, 0.0, 1.0]),
                Err(GaError::Input(_))
            ));
        }
    }

    #[test]
    fn test_unrepresentable_distance_rejected() {
        let err = build_distance_matrix(&[-1e308, 1e308], &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, GaError::Input(_)));
    }

    #[test]
    fn test_size_mismatch() {
        let err = build_distance_matrix(&[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            GaError::SizeMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_instance() {
        let m = build_distance_matrix(&[], &[]).unwrap();
        assert_eq!(m.dimension(), 0);
    }
}
