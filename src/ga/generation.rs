//! One generational step.
//!
//! The replacement policy is truncation followed by breeding:
//!
//! 1. Sort by fitness and keep the best half (`len / 2` survivors).
//! 2. Draw `survivors / 2` parent pairs from the survivors by roulette wheel.
//! 3. Each pair yields two children through crossover and one swap mutation
//!    each; children are evaluated as they are created.
//! 4. The next population is the survivors followed by all children.
//!
//! With `S = len / 2` the next size is `S + 2 * (S / 2)`: the size is kept
//! when `len` is a multiple of 4 and drifts down otherwise. Any population
//! of at least [`MIN_POPULATION`] maps to one that is again at least that
//! large.

use super::individual::Individual;
use super::operators::{crossover, swap_mutation};
use super::selection::select_parents;
use crate::error::{GaError, Result};
use crate::tsp::DistanceMatrix;
use rand::Rng;

/// Smallest population a generation can be run on.
///
/// Four keeps two survivors, which is the least that can form a parent pair.
pub const MIN_POPULATION: usize = 4;

/// Produces the next generation from `population`.
///
/// The caller's population is not modified.
///
/// # Errors
/// - [`GaError::PopulationTooSmall`] if `population` has fewer than
///   [`MIN_POPULATION`] individuals
/// - [`GaError::DegenerateFitness`] if a survivor has zero or non-finite
///   fitness
/// - [`GaError::SizeMismatch`] if tours do not match the matrix dimension
pub fn run_generation<R: Rng>(
    population: &[Individual],
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    if population.len() < MIN_POPULATION {
        return Err(GaError::PopulationTooSmall {
            size: population.len(),
            minimum: MIN_POPULATION,
        });
    }

    let mut next = truncate(population);
    let pairs = select_parents(&next, next.len() / 2, rng)?;

    let mut children = Vec::with_capacity(pairs.len() * 2);
    for (a, b) in pairs {
        let (c1, c2) = crossover(next[a].tour(), next[b].tour(), rng);
        for child in [c1, c2] {
            let child = swap_mutation(&child, rng);
            children.push(Individual::evaluated(child, matrix)?);
        }
    }

    log::trace!(
        "generation: {} survivors + {} children",
        next.len(),
        children.len()
    );
    next.extend(children);
    Ok(next)
}

/// Copies the best half of `population`, sorted by ascending fitness.
pub fn truncate(population: &[Individual]) -> Vec<Individual> {
    let mut sorted = population.to_vec();
    sorted.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
    sorted.truncate(population.len() / 2);
    sorted
}

/// The individual with the lowest fitness, if any.
pub fn best(population: &[Individual]) -> Option<&Individual> {
    population
        .iter()
        .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
}
