use super::error::BanditError;
use super::error::BanditResult;
use super::policy::Policy;
use super::simulation::Simulation;
use super::simulation::Trajectory;
use crate::Reward;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Experiment driver.
///
/// For each parameter value of a strategy, executes `runs` independent
/// simulations and averages their reward trajectories element-wise. Every run
/// draws fresh latent means, so the average smooths over environment
/// randomness as well as strategy randomness. Runs share no mutable state and
/// are dispatched to the rayon pool; each derives its own RNG seed from
/// (experiment seed, parameter, run index), so results do not depend on
/// scheduling order.
#[derive(Debug, Clone, Copy)]
pub struct Experiment {
    runs: usize,
    iterations: usize,
    arms: usize,
    mu: f64,
    spread: f64,
    seed: u64,
}

/// One averaged reward trajectory for one parameter value.
#[derive(Debug, Clone, Serialize)]
pub struct Curve {
    pub parameter: f64,
    pub rewards: Trajectory,
}

/// All averaged trajectories for one strategy's parameter sweep.
/// Finalized on construction and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Sweep {
    pub label: String,
    pub curves: Vec<Curve>,
}

impl Curve {
    /// Overall mean reward across the whole averaged trajectory.
    pub fn mean(&self) -> Reward {
        self.rewards.iter().sum::<Reward>() / self.rewards.len() as Reward
    }
}

impl Sweep {
    /// The best-performing parameter value by overall mean reward.
    pub fn best(&self) -> Option<&Curve> {
        self.curves
            .iter()
            .max_by(|a, b| a.mean().total_cmp(&b.mean()))
    }
}

impl Experiment {
    pub fn new(
        runs: usize,
        iterations: usize,
        arms: usize,
        mu: f64,
        spread: f64,
        seed: u64,
    ) -> BanditResult<Self> {
        if runs == 0 {
            Err(BanditError::InvalidRunCount)
        } else if iterations == 0 {
            Err(BanditError::InvalidIterationCount)
        } else if arms == 0 {
            Err(BanditError::InvalidArmCount)
        } else if !spread.is_finite() || spread < 0. {
            Err(BanditError::InvalidSpread(spread))
        } else {
            Ok(Self {
                runs,
                iterations,
                arms,
                mu,
                spread,
                seed,
            })
        }
    }

    /// Sweep one strategy over its parameter grid: one averaged curve per
    /// value, in input order. The factory builds a fresh policy per value so
    /// parameter validation surfaces here rather than mid-run.
    pub fn sweep<P, F>(&self, label: &str, parameters: &[f64], policy: F) -> BanditResult<Sweep>
    where
        P: Policy,
        F: Fn(f64) -> BanditResult<P>,
    {
        log::info!(
            "sweeping {} over {} parameter values ({} runs x {} steps)",
            label,
            parameters.len(),
            self.runs,
            self.iterations
        );
        let curves = parameters
            .iter()
            .map(|&parameter| {
                let rewards = self.average(&policy(parameter)?, parameter);
                log::debug!("{} = {}: averaged {} runs", label, parameter, self.runs);
                Ok(Curve { parameter, rewards })
            })
            .collect::<BanditResult<Vec<_>>>()?;
        Ok(Sweep {
            label: label.to_string(),
            curves,
        })
    }

    /// Element-wise average of `runs` independent trajectories under one
    /// policy. Parameters were validated at construction, so the per-run
    /// simulations cannot fail.
    pub fn average<P: Policy>(&self, policy: &P, parameter: f64) -> Trajectory {
        (0..self.runs)
            .into_par_iter()
            .map(|run| self.trajectory(policy, parameter, run))
            .reduce(
                || vec![0.; self.iterations],
                |mut sums, trajectory| {
                    for (sum, reward) in sums.iter_mut().zip(trajectory) {
                        *sum += reward;
                    }
                    sums
                },
            )
            .into_iter()
            .map(|sum| sum / self.runs as Reward)
            .collect()
    }

    /// One independent run with a derived seed.
    fn trajectory<P: Policy>(&self, policy: &P, parameter: f64, run: usize) -> Trajectory {
        Simulation::new(policy, self.arms, self.mu, self.spread, self.entropy(parameter, run))
            .and_then(|simulation| simulation.run(self.iterations))
            .map(|completed| completed.trajectory)
            .expect("experiment parameters validated at construction")
    }

    /// Deterministic per-run seed from (experiment seed, parameter, run).
    fn entropy(&self, parameter: f64, run: usize) -> u64 {
        let ref mut hasher = DefaultHasher::new();
        self.seed.hash(hasher);
        parameter.to_bits().hash(hasher);
        run.hash(hasher);
        hasher.finish()
    }
}
