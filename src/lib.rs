//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Evolves a population of closed tours (permutations of the points
//! `1..=N`) toward a short cyclic route:
//!
//! - **Fitness**: total cyclic tour length against a precomputed
//!   Euclidean distance matrix (lower is better).
//! - **Selection**: truncation to the best half of the population, then
//!   roulette-wheel parent pairs weighted by inverse fitness.
//! - **Crossover**: single-position swap between two parents followed by
//!   a bounded repair walk that restores both children to permutations.
//! - **Mutation**: one random swap on every offspring.
//!
//! # Quick start
//!
//! ```
//! use u_tspga::ga::{GaConfig, GaRunner};
//! use u_tspga::tsp::build_distance_matrix;
//!
//! let xs = [0.0, 1.0, 1.0, 0.0];
//! let ys = [0.0, 0.0, 1.0, 1.0];
//! let matrix = build_distance_matrix(&xs, &ys).unwrap();
//!
//! let config = GaConfig::default().with_generations(200).with_seed(7);
//! let result = GaRunner::run(&matrix, &config).unwrap();
//! assert!((result.best_fitness - 4.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`tsp`]: point sets, the distance matrix, input loading and the
//!   closed path handed to plotting tools
//! - [`ga`]: individuals, operators, the generational step and the runner
//! - [`error`]: the crate-wide [`GaError`](error::GaError)

pub mod error;
pub mod ga;
pub mod tsp;

pub use error::{GaError, Result};
pub use ga::{create_individual, fitness, run_generation};
pub use tsp::build_distance_matrix;
