use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regretsim::{Algorithm, Instance, Report, Simulation};
use tracing_subscriber::EnvFilter;

/// Simulate a Bernoulli multi-armed bandit and print the regret
#[derive(Parser)]
#[command(name = "regretsim", version)]
struct Cli {
    /// File of whitespace-separated arm probabilities
    #[arg(long)]
    instance: PathBuf,

    /// epsilon-greedy, ucb, kl-ucb, thompson-sampling or thompson-sampling-with-hint
    #[arg(long)]
    algorithm: Algorithm,

    /// Seed for the random generator
    #[arg(long = "randomSeed", alias = "random-seed", default_value_t = 0)]
    random_seed: u64,

    /// Exploration rate, required by epsilon-greedy
    #[arg(long)]
    epsilon: Option<f64>,

    /// Total number of pulls
    #[arg(long)]
    horizon: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let instance = Instance::load(&cli.instance)
        .with_context(|| format!("failed to load instance {}", cli.instance.display()))?;

    let outcome = Simulation::builder()
        .instance(instance)
        .algorithm(cli.algorithm)
        .maybe_epsilon(cli.epsilon)
        .horizon(cli.horizon)
        .seed(cli.random_seed)
        .build()
        .context("invalid simulation settings")?
        .run()?;

    let report = Report {
        instance: cli.instance.display().to_string(),
        algorithm: cli.algorithm,
        seed: cli.random_seed,
        epsilon: cli.epsilon,
        horizon: cli.horizon,
        regret: outcome.regret,
    };
    println!("{report}");

    Ok(())
}
