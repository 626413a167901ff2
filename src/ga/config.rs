//! GA configuration.
//!
//! [`GaConfig`] holds the parameters the driver owns: population size,
//! generation count, seed, and how often progress is logged.

use super::generation::MIN_POPULATION;
use crate::error::{GaError, Result};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tspga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tspga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the initial population.
    ///
    /// Each generation keeps the best half and breeds `half / 2` pairs,
    /// so the size only stays constant when it is a multiple of 4.
    /// Other sizes drift down to a stable value over the first few
    /// generations.
    pub population_size: usize,

    /// Number of generations to run. There is no early exit.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Log the current best fitness every this many generations.
    pub log_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 10_000,
            seed: None,
            log_interval: 1_000,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress logging interval.
    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    /// Whether the population size is kept exactly across generations.
    pub fn is_size_stable(&self) -> bool {
        self.population_size % 4 == 0
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] if the population is smaller than 4 or the
    /// logging interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < MIN_POPULATION {
            return Err(GaError::InvalidConfig(format!(
                "population_size must be at least {MIN_POPULATION}, got {}",
                self.population_size
            )));
        }
        if self.log_interval == 0 {
            return Err(GaError::InvalidConfig(
                "log_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
