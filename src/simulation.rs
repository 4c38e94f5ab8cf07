//! The simulation driver: warm-up, policy-driven decisions, regret.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, trace};

use crate::algorithm::Algorithm;
use crate::error::{Result, SimulationError};
use crate::history::History;
use crate::instance::Instance;
use crate::policies::Policy;
use crate::reward;

/// Result of one simulated run.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// `max(p) * horizon - total_reward`; negative after lucky draws
    pub regret: f64,
    /// Sum of all observed rewards
    pub total_reward: f64,
    /// `sum(pulls[i] * (max(p) - p[i]))`, the expected loss of the arms chosen
    pub pseudo_regret: f64,
    /// Final pull records
    pub history: History,
}

/// Runs `policy` on `instance` for `horizon` pulls, drawing from `rng`.
///
/// The first `min(n, horizon)` pulls visit each arm once in index order,
/// the remaining `horizon - n` are chosen by the policy. Every observation,
/// warm-up included, is passed to [`Policy::update`].
pub fn simulate(
    instance: &Instance,
    horizon: usize,
    policy: &mut dyn Policy,
    rng: &mut dyn rand::RngCore,
) -> Result<Outcome> {
    if horizon == 0 {
        return Err(SimulationError::ZeroHorizon);
    }

    let probabilities = instance.probabilities();
    let n_arms = probabilities.len();
    let mut history = History::new(n_arms);
    let mut total_reward = 0.0;

    debug!(policy = policy.name(), n_arms, horizon, "starting simulation");

    for (arm, &p) in probabilities.iter().enumerate().take(horizon) {
        let r = reward::pull(p, rng);
        history.record(arm, r);
        policy.update(arm, r);
        total_reward += r;
    }

    for step in 0..horizon.saturating_sub(n_arms) {
        let arm = policy
            .select(&history, rng)
            .ok_or(SimulationError::NoArmsAvailable)?;
        let p = *probabilities
            .get(arm)
            .ok_or_else(|| SimulationError::InvalidParameter {
                message: format!("policy {} selected arm {arm} of {n_arms}", policy.name()),
            })?;

        let r = reward::pull(p, rng);
        history.record(arm, r);
        policy.update(arm, r);
        total_reward += r;
        trace!(step, arm, reward = r, "decision");
    }

    let best = instance.max_probability();
    let regret = best * horizon as f64 - total_reward;
    let pseudo_regret = history
        .arms()
        .iter()
        .zip(probabilities)
        .map(|(stats, &p)| stats.pulls() as f64 * (best - p))
        .sum();

    debug!(
        policy = policy.name(),
        regret, total_reward, pseudo_regret, "simulation finished"
    );

    Ok(Outcome {
        regret,
        total_reward,
        pseudo_regret,
        history,
    })
}

/// A fully configured, seeded simulation.
///
/// Each simulation owns its own generator, so several can run in the same
/// process without sharing random state.
///
/// # Examples
///
/// ```
/// use regretsim::{Algorithm, Instance, Simulation};
///
/// let outcome = Simulation::builder()
///     .instance(Instance::new(vec![0.2, 0.8]).unwrap())
///     .algorithm(Algorithm::Ucb)
///     .horizon(100)
///     .seed(42)
///     .build()
///     .unwrap()
///     .run()
///     .unwrap();
///
/// assert_eq!(outcome.history.total_pulls(), 100);
/// ```
pub struct Simulation {
    instance: Instance,
    algorithm: Algorithm,
    epsilon: Option<f64>,
    horizon: usize,
    seed: u64,
    policy: Box<dyn Policy>,
    rng: Xoshiro256PlusPlus,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("instance", &self.instance)
            .field("algorithm", &self.algorithm)
            .field("epsilon", &self.epsilon)
            .field("horizon", &self.horizon)
            .field("seed", &self.seed)
            .finish()
    }
}

impl Simulation {
    /// Create a new builder for constructing a simulation
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    /// Gets the instance
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Gets the algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Gets the epsilon, if one was supplied
    pub fn epsilon(&self) -> Option<f64> {
        self.epsilon
    }

    /// Gets the horizon
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Gets the seed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs the simulation to the horizon
    pub fn run(mut self) -> Result<Outcome> {
        simulate(
            &self.instance,
            self.horizon,
            self.policy.as_mut(),
            &mut self.rng,
        )
    }
}

/// Builder for creating simulations with a fluent API
#[derive(Clone, Debug, Default)]
pub struct SimulationBuilder {
    instance: Option<Instance>,
    algorithm: Option<Algorithm>,
    epsilon: Option<f64>,
    horizon: Option<usize>,
    seed: u64,
}

impl SimulationBuilder {
    /// Set the bandit instance
    pub fn instance(mut self, instance: Instance) -> Self {
        self.instance = Some(instance);
        self
    }

    /// Set the algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set epsilon (used by epsilon-greedy only)
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Set epsilon from an optional value
    pub fn maybe_epsilon(mut self, epsilon: Option<f64>) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the total number of pulls
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Set the random seed (defaults to 0)
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration and build the simulation
    ///
    /// Fails before any pull is made when a required setting is missing or
    /// invalid.
    pub fn build(self) -> Result<Simulation> {
        let instance = self.instance.ok_or(SimulationError::BuilderError {
            message: "Instance not specified".into(),
        })?;

        let algorithm = self.algorithm.ok_or(SimulationError::BuilderError {
            message: "Algorithm not specified".into(),
        })?;

        let horizon = self.horizon.ok_or(SimulationError::BuilderError {
            message: "Horizon not specified".into(),
        })?;
        if horizon == 0 {
            return Err(SimulationError::ZeroHorizon);
        }

        if self.epsilon.is_some() && !algorithm.requires_epsilon() {
            debug!(%algorithm, "epsilon supplied but unused");
        }
        let policy = algorithm.build_policy(&instance, self.epsilon)?;

        Ok(Simulation {
            instance,
            algorithm,
            epsilon: self.epsilon,
            horizon,
            seed: self.seed,
            policy,
            rng: Xoshiro256PlusPlus::seed_from_u64(self.seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{Random, Ucb};

    #[test]
    fn test_warm_up_only_when_horizon_below_arms() {
        let instance = Instance::new(vec![0.2, 0.5, 0.8]).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let outcome = simulate(&instance, 2, &mut Ucb::new(), &mut rng).unwrap();

        assert_eq!(outcome.history.total_pulls(), 2);
        assert_eq!(outcome.history.arm(0).unwrap().pulls(), 1);
        assert_eq!(outcome.history.arm(1).unwrap().pulls(), 1);
        assert_eq!(outcome.history.arm(2).unwrap().pulls(), 0);
        assert_eq!(outcome.regret, 0.8 * 2.0 - outcome.total_reward);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let instance = Instance::new(vec![0.5]).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let result = simulate(&instance, 0, &mut Random, &mut rng);
        assert!(matches!(result, Err(SimulationError::ZeroHorizon)));
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        struct Rogue;
        impl Policy for Rogue {
            fn name(&self) -> &'static str {
                "rogue"
            }
            fn select(&self, _history: &History, _rng: &mut dyn rand::RngCore) -> Option<usize> {
                Some(5)
            }
            fn update(&mut self, _arm: usize, _reward: f64) {}
        }

        let instance = Instance::new(vec![0.5, 0.5]).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let result = simulate(&instance, 10, &mut Rogue, &mut rng);
        assert!(matches!(result, Err(SimulationError::InvalidParameter { .. })));
    }

    #[test]
    fn test_pseudo_regret_counts_suboptimal_pulls() {
        let instance = Instance::new(vec![0.25, 0.75]).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let outcome = simulate(&instance, 200, &mut Random, &mut rng).unwrap();

        let worse_pulls = outcome.history.arm(0).unwrap().pulls() as f64;
        assert_eq!(outcome.pseudo_regret, worse_pulls * 0.5);
    }

    #[test]
    fn test_builder_records_settings() {
        let simulation = Simulation::builder()
            .instance(Instance::new(vec![0.1, 0.9]).unwrap())
            .algorithm(Algorithm::EpsilonGreedy)
            .epsilon(0.2)
            .horizon(50)
            .seed(9)
            .build()
            .unwrap();

        assert_eq!(simulation.algorithm(), Algorithm::EpsilonGreedy);
        assert_eq!(simulation.epsilon(), Some(0.2));
        assert_eq!(simulation.horizon(), 50);
        assert_eq!(simulation.seed(), 9);
        assert_eq!(simulation.instance().n_arms(), 2);
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = Simulation::builder()
            .algorithm(Algorithm::Ucb)
            .horizon(5)
            .build();
        assert!(matches!(result, Err(SimulationError::BuilderError { .. })));

        let result = Simulation::builder()
            .instance(Instance::new(vec![0.5]).unwrap())
            .horizon(5)
            .build();
        assert!(matches!(result, Err(SimulationError::BuilderError { .. })));

        let result = Simulation::builder()
            .instance(Instance::new(vec![0.5]).unwrap())
            .algorithm(Algorithm::Ucb)
            .build();
        assert!(matches!(result, Err(SimulationError::BuilderError { .. })));
    }
}
