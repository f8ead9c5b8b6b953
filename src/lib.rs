//! Multi-armed bandit testbed.
//!
//! Simulates the k-armed bandit decision problem and compares three
//! action-selection strategies by averaging reward trajectories over many
//! independent seeded runs:
//! - epsilon-greedy (random exploration with probability epsilon)
//! - optimistic initialization (greedy over inflated initial estimates)
//! - upper confidence bound (exploration bonus shrinking with pull count)

pub mod bandit;

/// Observed and latent reward values.
pub type Reward = f64;
/// Exploration rates and selection frequencies.
pub type Probability = f64;
/// Index of an arm in [0, num_arms).
pub type Arm = usize;

// ============================================================================
// EXPERIMENT DEFAULTS
// Defaults for the compare binary; the library takes everything explicitly.
// ============================================================================
/// Steps per simulated run.
pub const DEFAULT_ITERATIONS: usize = 1000;
/// Independent runs averaged per parameter value.
pub const DEFAULT_RUNS: usize = 100;
/// Arms per bandit.
pub const DEFAULT_ARMS: usize = 10;
/// Center of the latent-mean distribution.
pub const DEFAULT_MEAN: f64 = 0.;
/// Scale of the latent-mean distribution.
pub const DEFAULT_SPREAD: f64 = 3.;
/// Epsilon grid for the epsilon-greedy sweep.
pub const DEFAULT_EPSILONS: [f64; 3] = [0.01, 0.1, 0.2];
/// Q1 grid for the optimistic-initialization sweep.
pub const DEFAULT_OPTIMISM: [f64; 3] = [1., 2., 5.];
/// c grid for the UCB sweep.
pub const DEFAULT_CONFIDENCE: [f64; 3] = [0.5, 2., 4.];

// ============================================================================
// REWARD MODEL PARAMETERS
// ============================================================================
/// Standard deviation of observed rewards around each arm's latent mean.
/// Only the means vary per arm; observation noise is fixed by design.
pub const REWARD_NOISE: f64 = 1.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
