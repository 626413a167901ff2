//! GA evolutionary loop execution.
//!
//! [`GaRunner`] seeds a random population and applies
//! [`run_generation`](super::run_generation) a fixed number of times.

use super::config::GaConfig;
use super::generation::{best, run_generation};
use super::individual::Individual;
use crate::error::{GaError, Result};
use crate::tsp::DistanceMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population, then after each generation.
    pub fitness_history: Vec<f64>,

    /// The final population, sorted by ascending fitness.
    pub population: Vec<Individual>,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_tspga::ga::{GaConfig, GaRunner};
/// use u_tspga::tsp::build_distance_matrix;
///
/// let matrix = build_distance_matrix(&[0.0, 2.0, 2.0, 0.0, 1.0], &[0.0, 0.0, 2.0, 2.0, 3.0]).unwrap();
/// let config = GaConfig::default().with_generations(100).with_seed(42);
/// let result = GaRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), 101);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed` (or a random seed).
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] for an invalid configuration, or any error
    /// raised while evolving (see [`run_generation`]).
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        log::debug!("seeding rng with {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs the GA with a caller-provided random source.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        if matrix.dimension() < 2 {
            return Err(GaError::input(format!(
                "need at least 2 points, got {}",
                matrix.dimension()
            )));
        }
        if !config.is_size_stable() {
            log::warn!(
                "population size {} is not a multiple of 4; it will shrink over the first generations",
                config.population_size
            );
        }

        log::info!(
            "evolving {} points: population {}, {} generations",
            matrix.dimension(),
            config.population_size,
            config.generations
        );

        // 1. Initialize population
        let mut population = (0..config.population_size)
            .map(|_| Individual::random(matrix, rng))
            .collect::<Result<Vec<_>>>()?;

        // 2. Track best
        let mut best_ind = best_of(&population)?.clone();
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best_ind.fitness());

        // 3. Evolutionary loop
        for gen in 1..=config.generations {
            population = run_generation(&population, matrix, rng)?;

            let gen_best = best_of(&population)?;
            if gen_best.fitness() < best_ind.fitness() {
                log::debug!(
                    "generation {gen}: best {:.6} -> {:.6}",
                    best_ind.fitness(),
                    gen_best.fitness()
                );
                best_ind = gen_best.clone();
            }
            fitness_history.push(best_ind.fitness());

            if gen % config.log_interval == 0 {
                log::info!(
                    "generation {gen}/{}: best {:.6}, population {}",
                    config.generations,
                    best_ind.fitness(),
                    population.len()
                );
            }
        }

        population.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        log::info!("finished: best fitness {:.6}", best_ind.fitness());

        Ok(GaResult {
            best_fitness: best_ind.fitness(),
            best: best_ind,
            generations: config.generations,
            fitness_history,
            population,
        })
    }
}

fn best_of(population: &[Individual]) -> Result<&Individual> {
    best(population).ok_or(GaError::PopulationTooSmall {
        size: 0,
        minimum: 1,
    })
}

// ============================================================================
// Tests
// ============================================================================
