//! Error type shared by every fallible operation in the crate.

use thiserror::Error as ThisError;

/// Errors raised while building an instance or evolving a population.
///
/// Every operation here is pure computation, so none of these are
/// retryable: they are surfaced to the caller and end the run.
#[derive(Debug, ThisError)]
pub enum GaError {
    /// Two sequences that must agree in length do not.
    #[error("size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A fitness value that cannot take part in inverse-fitness selection.
    #[error("degenerate fitness {fitness} at population index {index}")]
    DegenerateFitness { index: usize, fitness: f64 },

    /// The population is too small to produce a next generation.
    #[error("population of {size} is too small (minimum {minimum})")]
    PopulationTooSmall { size: usize, minimum: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GaError>;

impl GaError {
    pub fn size_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            context,
            expected,
            actual,
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}
