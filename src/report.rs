//! One-line result records.

use std::fmt;

use crate::algorithm::Algorithm;

/// Epsilon printed when none was supplied.
pub const DEFAULT_REPORTED_EPSILON: f64 = 0.1;

/// A finished run together with the inputs that produced it.
///
/// Displays as `instance, algorithm, seed, epsilon, horizon, regret`, a
/// format meant for appending to a CSV-like log.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Where the instance came from, typically its file path
    pub instance: String,
    pub algorithm: Algorithm,
    pub seed: u64,
    pub epsilon: Option<f64>,
    pub horizon: usize,
    pub regret: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {:?}, {}, {:?}",
            self.instance,
            self.algorithm,
            self.seed,
            self.epsilon.unwrap_or(DEFAULT_REPORTED_EPSILON),
            self.horizon,
            self.regret
        )
    }
}
