//! Genetic Algorithm for closed tours.
//!
//! The engine evolves a population of [`Individual`]s, each a permutation
//! of the points `1..=N` with its cached tour length.
//!
//! # Operations
//!
//! - [`create_individual`], [`fitness`]: random tours and their cyclic length
//! - [`selection_probability`], [`select_parents`]: inverse-fitness roulette
//! - [`crossover`], [`swap_mutation`]: the variation operators
//! - [`run_generation`]: truncation, breeding and reassembly for one step
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation count, seed
//! - [`GaRunner`]: executes the loop for a fixed number of generations
//! - [`GaResult`]: best tour, fitness history and final population
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod generation;
mod individual;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use generation::{best, run_generation, truncate, MIN_POPULATION};
pub use individual::{create_individual, fitness, is_valid_tour, Individual};
pub use operators::{crossover, crossover_at, swap_mutation};
pub use runner::{GaResult, GaRunner};
pub use selection::{select_parents, selection_probability};
