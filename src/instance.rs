//! Bandit instances: the hidden success probabilities of each arm.
//!
//! Arms are identified by their index `0..n`. An [`Instance`] is immutable
//! once built; only the reward source and the regret accounting read the
//! probabilities, policies never see them.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Result, SimulationError};

/// An ordered set of Bernoulli arms.
///
/// # Examples
///
/// ```
/// use regretsim::Instance;
///
/// let instance = Instance::new(vec![0.2, 0.5, 0.8]).unwrap();
/// assert_eq!(instance.n_arms(), 3);
/// assert_eq!(instance.max_probability(), 0.8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    probabilities: Vec<f64>,
}

impl Instance {
    /// Creates an instance, rejecting empty input and probabilities outside `[0, 1]`.
    pub fn new<I>(probabilities: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let probabilities: Vec<f64> = probabilities.into_iter().collect();

        if probabilities.is_empty() {
            return Err(SimulationError::NoArmsAvailable);
        }

        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(SimulationError::InvalidProbability { index, value });
        }

        Ok(Self { probabilities })
    }

    /// Parses whitespace-separated probabilities.
    ///
    /// Values may be spread over any number of lines. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut probabilities = Vec::new();

        for (line_no, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            for token in trimmed.split_whitespace() {
                let value = token
                    .parse::<f64>()
                    .map_err(|_| SimulationError::InstanceParse {
                        line: line_no + 1,
                        token: token.to_string(),
                    })?;
                probabilities.push(value);
            }
        }

        Self::new(probabilities)
    }

    /// Loads an instance file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Number of arms.
    pub fn n_arms(&self) -> usize {
        self.probabilities.len()
    }

    /// The true success probabilities, in arm order.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Success probability of the best arm.
    pub fn max_probability(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// The probabilities sorted ascending, without arm identities.
    pub fn hint(&self) -> Vec<f64> {
        let mut hint = self.probabilities.clone();
        hint.sort_by(f64::total_cmp);
        hint
    }
}
