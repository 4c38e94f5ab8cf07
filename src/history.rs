//! Per-arm pull records shared by the driver and the policies.

/// Pull count and reward total for a single arm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArmStats {
    pulls: usize,
    sum_rewards: f64,
}

impl ArmStats {
    /// Number of times the arm was pulled.
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    /// Sum of the rewards observed on this arm.
    pub fn sum_rewards(&self) -> f64 {
        self.sum_rewards
    }

    /// Observed successes.
    pub fn successes(&self) -> f64 {
        self.sum_rewards
    }

    /// Observed failures.
    pub fn failures(&self) -> f64 {
        self.pulls as f64 - self.sum_rewards
    }

    /// Empirical mean reward, `0.0` for an arm never pulled.
    pub fn average_reward(&self) -> f64 {
        if self.pulls == 0 {
            0.0
        } else {
            self.sum_rewards / self.pulls as f64
        }
    }
}

/// Pull records for every arm of an instance.
///
/// Only [`History::record`] mutates the records, once per pull, so
/// `0 <= sum_rewards <= pulls` holds for every arm whenever rewards are
/// Bernoulli.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    arms: Vec<ArmStats>,
    total_pulls: usize,
}

impl History {
    /// Empty records for `n_arms` arms.
    pub fn new(n_arms: usize) -> Self {
        Self {
            arms: vec![ArmStats::default(); n_arms],
            total_pulls: 0,
        }
    }

    /// Records one pull of `arm` with the observed `reward`.
    ///
    /// # Panics
    /// Panics if `arm` is out of range.
    pub fn record(&mut self, arm: usize, reward: f64) {
        let stats = &mut self.arms[arm];
        stats.pulls += 1;
        stats.sum_rewards += reward;
        self.total_pulls += 1;
    }

    /// Number of arms tracked.
    pub fn n_arms(&self) -> usize {
        self.arms.len()
    }

    /// Total pulls across all arms.
    pub fn total_pulls(&self) -> usize {
        self.total_pulls
    }

    /// Statistics for a single arm.
    pub fn arm(&self, arm: usize) -> Option<&ArmStats> {
        self.arms.get(arm)
    }

    /// Statistics for every arm, in index order.
    pub fn arms(&self) -> &[ArmStats] {
        &self.arms
    }

    /// Empirical mean of every arm, in index order.
    pub fn means(&self) -> Vec<f64> {
        self.arms.iter().map(ArmStats::average_reward).collect()
    }
}
