use super::{Policy, argmax};
use crate::history::{ArmStats, History};

/// Upper Confidence Bound (UCB1) policy
///
/// Scores each arm as `mean + sqrt(2 ln t / pulls)` where `t` is the total
/// number of pulls made so far, and picks the highest score. Arms that were
/// never pulled score infinity.
#[derive(Clone, Debug, Default)]
pub struct Ucb;

impl Ucb {
    /// Creates a new UCB1 policy
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// UCB score of every arm, in index order
    pub fn scores(&self, history: &History) -> Vec<f64> {
        let total_pulls = history.total_pulls();
        history
            .arms()
            .iter()
            .map(|stats| ucb_score(stats, total_pulls))
            .collect()
    }
}

fn ucb_score(stats: &ArmStats, total_pulls: usize) -> f64 {
    if stats.pulls() == 0 {
        // Unpulled arms have infinite UCB score (explore first)
        f64::INFINITY
    } else {
        let exploration = (2.0 * (total_pulls as f64).ln() / stats.pulls() as f64).sqrt();
        stats.average_reward() + exploration
    }
}

impl Policy for Ucb {
    fn name(&self) -> &'static str {
        "ucb"
    }

    fn select(&self, history: &History, _rng: &mut dyn rand::RngCore) -> Option<usize> {
        argmax(self.scores(history))
    }

    fn update(&mut self, _arm: usize, _reward: f64) {
        // Scores are computed from the history on demand
    }
}
