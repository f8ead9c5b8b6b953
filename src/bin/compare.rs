//! Compare Binary
//!
//! Runs the epsilon-greedy, optimistic-initialization, and UCB sweeps over
//! the same experiment settings, reports each strategy's best parameter, and
//! optionally writes every averaged trajectory to a JSON file for plotting.

use clap::Parser;
use multiarm::bandit::*;

#[derive(Parser)]
#[command(author, version, about = "Compare multi-armed bandit strategies", long_about = None)]
struct Args {
    /// Steps per simulated run
    #[arg(long, default_value_t = multiarm::DEFAULT_ITERATIONS)]
    iterations: usize,
    /// Independent runs averaged per parameter value
    #[arg(long, default_value_t = multiarm::DEFAULT_RUNS)]
    runs: usize,
    /// Arms per bandit
    #[arg(long, default_value_t = multiarm::DEFAULT_ARMS)]
    arms: usize,
    /// Center of the latent-mean distribution
    #[arg(long, default_value_t = multiarm::DEFAULT_MEAN)]
    mu: f64,
    /// Scale of the latent-mean distribution
    #[arg(long, default_value_t = multiarm::DEFAULT_SPREAD)]
    var: f64,
    /// Base seed for reproducible experiments
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Epsilon values for the epsilon-greedy sweep
    #[arg(long, num_args = 1.., default_values_t = multiarm::DEFAULT_EPSILONS)]
    eps: Vec<f64>,
    /// Q1 values for the optimistic-initialization sweep
    #[arg(long, num_args = 1.., default_values_t = multiarm::DEFAULT_OPTIMISM)]
    qs: Vec<f64>,
    /// c values for the UCB sweep
    #[arg(long, num_args = 1.., default_values_t = multiarm::DEFAULT_CONFIDENCE)]
    cs: Vec<f64>,
    /// Write all averaged trajectories to this JSON file
    #[arg(long)]
    output: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    multiarm::log();
    let args = Args::parse();
    let experiment = Experiment::new(
        args.runs,
        args.iterations,
        args.arms,
        args.mu,
        args.var,
        args.seed,
    )?;
    let sweeps = vec![
        experiment.sweep("epsilon_greedy", &args.eps, EpsilonGreedy::new)?,
        experiment.sweep("optimistic_initialization", &args.qs, |q| {
            Ok(OptimisticGreedy::new(q))
        })?,
        experiment.sweep("ucb", &args.cs, |c| Ok(Ucb::new(c)))?,
    ];
    for sweep in sweeps.iter() {
        if let Some(best) = sweep.best() {
            log::info!(
                "{}: best parameter {} (mean reward {:.4})",
                sweep.label,
                best.parameter,
                best.mean()
            );
        }
    }
    if let Some(ref path) = args.output {
        serde_json::to_writer_pretty(std::fs::File::create(path)?, &sweeps)?;
        log::info!("wrote {} sweeps to {}", sweeps.len(), path.display());
    }
    Ok(())
}
