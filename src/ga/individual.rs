//! Candidate tours and their fitness.
//!
//! A tour is a permutation of the point numbers `1..=N`; its fitness is the
//! length of the closed cycle it describes. Lower fitness is better.

use crate::error::{GaError, Result};
use crate::tsp::DistanceMatrix;
use rand::seq::SliceRandom;
use rand::Rng;

/// A tour paired with its cached fitness.
///
/// Fields are private: an `Individual` can only be built through
/// [`Individual::evaluated`] or [`Individual::random`], both of which compute
/// the fitness, so the cached value always matches the tour. With the `serde`
/// feature it can be serialized but not deserialized, since that would
/// bypass evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Individual {
    tour: Vec<usize>,
    fitness: f64,
}

impl Individual {
    /// Evaluates `tour` against `matrix` and wraps both.
    ///
    /// # Errors
    /// Any error from [`fitness`].
    pub fn evaluated(tour: Vec<usize>, matrix: &DistanceMatrix) -> Result<Self> {
        let fitness = fitness(&tour, matrix)?;
        Ok(Self { tour, fitness })
    }

    /// Creates a random tour over all points of `matrix` and evaluates it.
    pub fn random<R: Rng>(matrix: &DistanceMatrix, rng: &mut R) -> Result<Self> {
        Self::evaluated(create_individual(matrix.dimension(), rng), matrix)
    }

    /// The visiting order, as 1-based point numbers.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Total cyclic tour length.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the individual, keeping only the tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }
}

/// Returns a uniformly random permutation of `1..=n`.
pub fn create_individual<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (1..=n).collect();
    tour.shuffle(rng);
    tour
}

/// Computes the cyclic length of `tour`.
///
/// Sums `d(tour[k], tour[k + 1])` over consecutive stops and closes the
/// cycle with `d(tour[last], tour[0])`. Point numbers are 1-based; the
/// matrix is 0-based.
///
/// # Errors
/// - [`GaError::SizeMismatch`] if `tour.len() != matrix.dimension()`
/// - [`GaError::Input`] if a tour value lies outside `1..=N`
pub fn fitness(tour: &[usize], matrix: &DistanceMatrix) -> Result<f64> {
    let n = matrix.dimension();
    if tour.len() != n {
        return Err(GaError::size_mismatch("tour vs distance matrix", n, tour.len()));
    }
    if let Some(&city) = tour.iter().find(|&&city| city == 0 || city > n) {
        return Err(GaError::input(format!("tour value {city} outside 1..={n}")));
    }

    let closing = tour.first().into_iter();
    let total: f64 = tour
        .iter()
        .zip(tour.iter().skip(1).chain(closing))
        .map(|(&a, &b)| matrix.get(a - 1, b - 1))
        .sum();
    Ok(total)
}

/// Whether `tour` is a bijection on `1..=n`.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city == 0 || city > n || seen[city - 1] {
            return false;
        }
        seen[city - 1] = true;
    }
    true
}
