//! Coordinate input.
//!
//! The input format is a plain-text matrix with two rows: row 0 holds the
//! x-coordinates, row 1 the y-coordinates, whitespace-separated, one column
//! per point. Blank lines are ignored.

use crate::error::{GaError, Result};
use std::path::Path;

/// A point set as two equal-length coordinate sequences.
///
/// Point `k` (1-based, as used by tours) is `(xs[k - 1], ys[k - 1])`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Points {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Points {
    /// Creates a point set, rejecting sequences of unequal length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GaError::size_mismatch("coordinates", xs.len(), ys.len()));
        }
        Ok(Self { xs, ys })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Reads a point set from a two-row coordinate file.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Points> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let points = parse_points(&text)?;
    log::debug!(
        "loaded {} points from {}",
        points.len(),
        path.as_ref().display()
    );
    Ok(points)
}

/// Parses the two-row coordinate format from a string.
///
/// # Errors
/// - [`GaError::Parse`] for a token that is not a number
/// - [`GaError::Input`] unless there are exactly two non-blank rows
/// - [`GaError::SizeMismatch`] if the rows differ in length
pub fn parse_points(text: &str) -> Result<Points> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(2);

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| GaError::Parse {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    let [xs, ys]: [Vec<f64>; 2] = rows.try_into().map_err(|rows: Vec<Vec<f64>>| {
        GaError::input(format!(
            "expected 2 coordinate rows (x and y), found {}",
            rows.len()
        ))
    })?;
    Points::new(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_rows() {
        let points = parse_points("0 1 1 0\n0 0 1 1\n").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points.xs, vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(points.ys, vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_scientific_and_blank_lines() {
        let text = "\n  1.5e+01\t-2.0   3\n\n4.0e-1 5 6.25\n\n";
        let points = parse_points(text).unwrap();
        assert_eq!(points.xs, vec![15.0, -2.0, 3.0]);
        assert_eq!(points.ys, vec![0.4, 5.0, 6.25]);
    }

    #[test]
    fn test_parse_bad_token() {
        let err = parse_points("0 1 x\n0 0 1\n").unwrap_err();
        match err {
            GaError::Parse { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_wrong_row_count() {
        assert!(matches!(parse_points("0 1 2\n"), Err(GaError::Input(_))));
        assert!(matches!(
            parse_points("0 1\n0 1\n0 1\n"),
            Err(GaError::Input(_))
        ));
    }

    #[test]
    fn test_parse_unequal_rows() {
        assert!(matches!(
            parse_points("0 1 2\n0 1\n"),
            Err(GaError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_points("/nonexistent/definitely/missing.mat").unwrap_err();
        assert!(matches!(err, GaError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("u_tspga_load_{}.mat", std::process::id()));
        std::fs::write(&path, "0 3\n0 4\n").unwrap();
        let points = load_points(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(points, Points::new(vec![0.0, 3.0], vec![0.0, 4.0]).unwrap());
    }
}
