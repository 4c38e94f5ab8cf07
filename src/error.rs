//! Error types for the regretsim library.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors that can occur while configuring or running a simulation.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The instance has no arms.
    #[error("no arms available")]
    NoArmsAvailable,

    /// An arm's success probability is outside `[0, 1]` or not finite.
    #[error("invalid probability {value} for arm {index}: must be within [0, 1]")]
    InvalidProbability { index: usize, value: f64 },

    /// Invalid parameter value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A parameter required by the selected algorithm was not supplied.
    #[error("algorithm {algorithm} requires parameter {parameter}")]
    MissingParameter {
        algorithm: &'static str,
        parameter: &'static str,
    },

    /// The algorithm identifier is not one of the known policies.
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// The horizon must allow at least one pull.
    #[error("horizon must be positive")]
    ZeroHorizon,

    /// Builder configuration error.
    #[error("builder error: {message}")]
    BuilderError { message: String },

    /// A token in an instance file is not a number.
    #[error("instance parse error on line {line}: {token:?} is not a number")]
    InstanceParse { line: usize, token: String },

    /// Reading an instance file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
