//! Algorithm identifiers and policy construction.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimulationError};
use crate::instance::Instance;
use crate::policies::{EpsilonGreedy, KlUcb, Policy, ThompsonSampling, ThompsonWithHint, Ucb};

/// The selectable bandit algorithms.
///
/// # Examples
///
/// ```
/// use regretsim::Algorithm;
///
/// let algorithm: Algorithm = "kl-ucb".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::KlUcb);
/// assert_eq!(algorithm.to_string(), "kl-ucb");
/// assert!("softmax".parse::<Algorithm>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Constant-epsilon greedy; requires `epsilon`
    EpsilonGreedy,
    /// UCB1
    Ucb,
    /// KL-UCB with exploration constant 3
    KlUcb,
    /// Beta-Bernoulli Thompson sampling
    ThompsonSampling,
    /// Thompson sampling that knows the set of true rates
    ThompsonSamplingWithHint,
}

impl Algorithm {
    /// Every algorithm, in the order they are usually listed.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::EpsilonGreedy,
        Algorithm::Ucb,
        Algorithm::KlUcb,
        Algorithm::ThompsonSampling,
        Algorithm::ThompsonSamplingWithHint,
    ];

    /// The identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::EpsilonGreedy => "epsilon-greedy",
            Algorithm::Ucb => "ucb",
            Algorithm::KlUcb => "kl-ucb",
            Algorithm::ThompsonSampling => "thompson-sampling",
            Algorithm::ThompsonSamplingWithHint => "thompson-sampling-with-hint",
        }
    }

    /// Whether the algorithm needs an `epsilon` parameter.
    pub fn requires_epsilon(&self) -> bool {
        matches!(self, Algorithm::EpsilonGreedy)
    }

    /// Builds the policy for `instance`.
    ///
    /// `epsilon` is required for [`Algorithm::EpsilonGreedy`] and ignored
    /// otherwise. The hinted variant receives the sorted rates of the
    /// instance, never the arm-to-rate mapping.
    pub fn build_policy(
        &self,
        instance: &Instance,
        epsilon: Option<f64>,
    ) -> Result<Box<dyn Policy>> {
        let policy: Box<dyn Policy> = match self {
            Algorithm::EpsilonGreedy => {
                let epsilon = epsilon.ok_or(SimulationError::MissingParameter {
                    algorithm: self.as_str(),
                    parameter: "epsilon",
                })?;
                Box::new(EpsilonGreedy::new(epsilon)?)
            }
            Algorithm::Ucb => Box::new(Ucb::new()),
            Algorithm::KlUcb => Box::new(KlUcb::new()),
            Algorithm::ThompsonSampling => Box::new(ThompsonSampling::new()),
            Algorithm::ThompsonSamplingWithHint => {
                Box::new(ThompsonWithHint::new(instance.hint())?)
            }
        };
        Ok(policy)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| SimulationError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
