use rand::Rng;
use rand_distr::{Beta, Distribution};

use super::{Policy, argmax};
use crate::error::{Result, SimulationError};
use crate::history::{ArmStats, History};

/// Thompson Sampling policy using Beta distribution
///
/// Draws one sample per arm from `Beta(successes + alpha, failures + beta)`
/// and selects the arm with the largest sample. Successes and failures are
/// read from the pull history.
#[derive(Clone, Debug)]
pub struct ThompsonSampling {
    /// Prior alpha parameter for Beta distribution (defaults to 1.0)
    prior_alpha: f64,
    /// Prior beta parameter for Beta distribution (defaults to 1.0)
    prior_beta: f64,
}

impl ThompsonSampling {
    /// Creates a new Thompson Sampling policy with default priors (uniform Beta(1,1))
    #[must_use]
    pub fn new() -> Self {
        Self {
            prior_alpha: 1.0,
            prior_beta: 1.0,
        }
    }

    /// Creates a new Thompson Sampling policy with specified Beta prior parameters
    ///
    /// # Arguments
    /// * `prior_alpha` - Alpha parameter for Beta prior (must be positive)
    /// * `prior_beta` - Beta parameter for Beta prior (must be positive)
    pub fn with_prior(prior_alpha: f64, prior_beta: f64) -> Result<Self> {
        if !(prior_alpha > 0.0 && prior_beta > 0.0) {
            return Err(SimulationError::InvalidParameter {
                message: format!(
                    "beta prior must be positive, got ({prior_alpha}, {prior_beta})"
                ),
            });
        }
        Ok(Self {
            prior_alpha,
            prior_beta,
        })
    }

    /// Gets the prior parameters
    pub fn prior(&self) -> (f64, f64) {
        (self.prior_alpha, self.prior_beta)
    }

    /// Sample from the posterior Beta distribution of one arm
    fn sample<R: Rng + ?Sized>(&self, stats: &ArmStats, rng: &mut R) -> f64 {
        let alpha = stats.successes() + self.prior_alpha;
        let beta = stats.failures() + self.prior_beta;

        match Beta::new(alpha, beta) {
            Ok(dist) => dist.sample(rng),
            Err(_) => {
                // If Beta distribution creation fails, use mean
                alpha / (alpha + beta)
            }
        }
    }
}

impl Default for ThompsonSampling {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for ThompsonSampling {
    fn name(&self) -> &'static str {
        "thompson-sampling"
    }

    fn select(&self, history: &History, rng: &mut dyn rand::RngCore) -> Option<usize> {
        // One draw per arm, in index order
        let samples: Vec<f64> = history
            .arms()
            .iter()
            .map(|stats| self.sample(stats, rng))
            .collect();
        argmax(samples)
    }

    fn update(&mut self, _arm: usize, _reward: f64) {
        // Posterior counts are read from the history
    }
}
