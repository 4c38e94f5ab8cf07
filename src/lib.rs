//! regretsim: a simulator for the stochastic Bernoulli multi-armed bandit.
//!
//! Each arm pays 1 with a fixed hidden probability. A policy repeatedly picks
//! an arm from the pull history alone, and the run is scored by its regret
//! against an oracle that always pulls the best arm.
//!
//! Five policies are available: epsilon-greedy, UCB1, KL-UCB, Thompson
//! sampling and Thompson sampling with a hint of the true rates.
//!
//! # Quick Start
//!
//! ```
//! use regretsim::prelude::*;
//!
//! let instance = Instance::new(vec![0.1, 0.5, 0.9]).unwrap();
//!
//! let outcome = Simulation::builder()
//!     .instance(instance)
//!     .algorithm(Algorithm::ThompsonSampling)
//!     .horizon(1000)
//!     .seed(7)
//!     .build()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(outcome.history.total_pulls(), 1000);
//! println!("regret: {}", outcome.regret);
//! ```
//!
//! Policies can also be driven directly with any generator:
//!
//! ```
//! use rand::SeedableRng;
//! use regretsim::policies::Ucb;
//! use regretsim::{Instance, simulate};
//!
//! let instance = Instance::new(vec![0.3, 0.6]).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let outcome = simulate(&instance, 50, &mut Ucb::new(), &mut rng).unwrap();
//! assert_eq!(outcome.history.total_pulls(), 50);
//! ```

mod algorithm;
mod error;
mod history;
mod instance;
pub mod policies;
mod report;
pub mod reward;
mod simulation;

// Re-export main types
pub use algorithm::Algorithm;
pub use error::{Result, SimulationError};
pub use history::{ArmStats, History};
pub use instance::Instance;
pub use report::{DEFAULT_REPORTED_EPSILON, Report};
pub use simulation::{Outcome, Simulation, SimulationBuilder, simulate};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use regretsim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{
        EpsilonGreedy, KlUcb, Policy, Random, ThompsonSampling, ThompsonWithHint, Ucb,
    };
    pub use crate::{
        Algorithm, History, Instance, Outcome, Result, Simulation, SimulationError, simulate,
    };
}
