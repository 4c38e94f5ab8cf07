use rand::Rng;

use super::{Policy, argmax};
use crate::error::{Result, SimulationError};
use crate::history::History;

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
///
/// Exploration picks an arm uniformly at random. Exploitation picks the arm
/// with the highest empirical mean, ties going to the lowest index. Epsilon
/// stays constant for the whole run.
#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    pub fn new(epsilon: f64) -> Result<Self> {
        Self::validate(epsilon)?;
        Ok(Self { epsilon })
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sets the epsilon value
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        Self::validate(epsilon)?;
        self.epsilon = epsilon;
        Ok(())
    }

    fn validate(epsilon: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(SimulationError::InvalidParameter {
                message: format!("epsilon must be between 0 and 1, got {epsilon}"),
            });
        }
        Ok(())
    }
}

impl Policy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon-greedy"
    }

    fn select(&self, history: &History, rng: &mut dyn rand::RngCore) -> Option<usize> {
        let n_arms = history.n_arms();
        if n_arms == 0 {
            return None;
        }

        // Explore with probability epsilon
        if rng.random::<f64>() < self.epsilon {
            Some(rng.random_range(0..n_arms))
        } else {
            argmax(history.means())
        }
    }

    fn update(&mut self, _arm: usize, _reward: f64) {
        // Means are read straight from the history
    }
}
