use super::{Policy, argmax};
use crate::error::{Result, SimulationError};
use crate::history::History;

/// Added to the denominators inside the logarithms of [`bernoulli_kl`] so the
/// divergence stays finite at `q = 0` and `q = 1`.
pub const KL_STABILIZER: f64 = 1e-9;

/// Width at which the upper-bound search stops.
pub const SEARCH_TOLERANCE: f64 = 1e-3;

/// Bernoulli Kullback-Leibler divergence `KL(p || q)`.
///
/// Terms with a zero coefficient are dropped (`0 ln 0 = 0`), so `p = 0` and
/// `p = 1` give finite values.
pub fn bernoulli_kl(p: f64, q: f64) -> f64 {
    let mut kl = 0.0;
    if p > 0.0 {
        kl += p * (p / (q + KL_STABILIZER)).ln();
    }
    if p < 1.0 {
        kl += (1.0 - p) * ((1.0 - p) / (1.0 - q + KL_STABILIZER)).ln();
    }
    kl
}

/// Largest `q` in `[mean, 1]` with `pulls * KL(mean || q) <= threshold`,
/// found by bisection to within [`SEARCH_TOLERANCE`].
///
/// The lower end always satisfies the constraint and the upper end either
/// violates it or is still `1.0`. The midpoint of the final bracket is
/// returned, so the result lies in `[mean, 1]`.
pub fn kl_upper_bound(mean: f64, pulls: usize, threshold: f64) -> f64 {
    let mut low = mean;
    let mut high = 1.0;
    while high - low > SEARCH_TOLERANCE {
        let mid = (low + high) / 2.0;
        if pulls as f64 * bernoulli_kl(mean, mid) > threshold {
            high = mid;
        } else {
            low = mid;
        }
    }
    (low + high) / 2.0
}

/// KL-UCB policy for Bernoulli rewards
///
/// Each arm's index is the largest plausible mean under the KL confidence
/// region `pulls * KL(mean || q) <= ln t + c ln ln t`, with `t` the total
/// number of pulls so far.
#[derive(Clone, Debug)]
pub struct KlUcb {
    /// Exploration constant `c` (3.0 by default)
    exploration: f64,
}

impl KlUcb {
    /// Default exploration constant
    pub const DEFAULT_EXPLORATION: f64 = 3.0;

    /// Creates a KL-UCB policy with the default exploration constant
    #[must_use]
    pub fn new() -> Self {
        Self {
            exploration: Self::DEFAULT_EXPLORATION,
        }
    }

    /// Creates a KL-UCB policy with a custom exploration constant
    pub fn with_exploration(exploration: f64) -> Result<Self> {
        if !(exploration >= 0.0 && exploration.is_finite()) {
            return Err(SimulationError::InvalidParameter {
                message: format!("exploration must be non-negative, got {exploration}"),
            });
        }
        Ok(Self { exploration })
    }

    /// Gets the exploration constant
    pub fn exploration(&self) -> f64 {
        self.exploration
    }

    /// Confidence threshold after `total_pulls` pulls.
    ///
    /// Negative (or `-inf`) for small `t`, in which case every bound collapses
    /// onto its arm's mean.
    pub fn threshold(&self, total_pulls: usize) -> f64 {
        let log_t = (total_pulls as f64).ln();
        log_t + self.exploration * log_t.ln()
    }

    /// Upper confidence bound of every arm, in index order
    pub fn bounds(&self, history: &History) -> Vec<f64> {
        let threshold = self.threshold(history.total_pulls());
        history
            .arms()
            .iter()
            .map(|stats| {
                if stats.pulls() == 0 {
                    f64::INFINITY
                } else {
                    kl_upper_bound(stats.average_reward(), stats.pulls(), threshold)
                }
            })
            .collect()
    }
}

impl Default for KlUcb {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for KlUcb {
    fn name(&self) -> &'static str {
        "kl-ucb"
    }

    fn select(&self, history: &History, _rng: &mut dyn rand::RngCore) -> Option<usize> {
        argmax(self.bounds(history))
    }

    fn update(&mut self, _arm: usize, _reward: f64) {
        // Bounds are computed from the history on demand
    }
}
