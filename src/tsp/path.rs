//! Closed tour paths for plotting.

use super::input::Points;
use crate::error::{GaError, Result};
use std::path::Path;

/// Reorders the coordinates along `tour` and closes the cycle.
///
/// Returns `(xs, ys)` of length `tour.len() + 1`, where position `k` is the
/// point visited `k`-th and the last entry repeats the starting point.
///
/// # Errors
/// - [`GaError::SizeMismatch`] if the tour and the point set differ in length
/// - [`GaError::Input`] if a tour value lies outside `1..=N`
pub fn closed_path(tour: &[usize], points: &Points) -> Result<(Vec<f64>, Vec<f64>)> {
    let n = points.len();
    if tour.len() != n {
        return Err(GaError::size_mismatch("tour vs points", n, tour.len()));
    }

    let mut xs = Vec::with_capacity(n + 1);
    let mut ys = Vec::with_capacity(n + 1);
    for &city in tour {
        if city == 0 || city > n {
            return Err(GaError::input(format!(
                "tour value {city} outside 1..={n}"
            )));
        }
        xs.push(points.xs[city - 1]);
        ys.push(points.ys[city - 1]);
    }

    if let (Some(&x0), Some(&y0)) = (xs.first(), ys.first()) {
        xs.push(x0);
        ys.push(y0);
    }

    Ok((xs, ys))
}

/// Writes a coordinate path in the same two-row format the input uses.
pub fn write_path<P: AsRef<Path>>(path: P, xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(GaError::size_mismatch("path coordinates", xs.len(), ys.len()));
    }

    let mut out = String::new();
    for row in [xs, ys] {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }

    std::fs::write(path.as_ref(), out)?;
    log::info!(
        "wrote {} path vertices to {}",
        xs.len(),
        path.as_ref().display()
    );
    Ok(())
}
