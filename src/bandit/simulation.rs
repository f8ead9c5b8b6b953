use super::error::BanditError;
use super::error::BanditResult;
use super::estimates::Estimates;
use super::gaussian::GaussianArms;
use super::policy::Policy;
use crate::Reward;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One run's reward sequence, one entry per step.
pub type Trajectory = Vec<Reward>;

/// A single-use bandit trial.
///
/// Construction draws fresh latent means and resets all counts; `run`
/// consumes the simulator, so a trial cannot be resumed or replayed. Each
/// simulation owns its own RNG seeded from a caller-provided u64, which keeps
/// runs reproducible and lets the experiment layer dispatch them across
/// threads without shared generator state.
pub struct Simulation<'a, P: Policy> {
    policy: &'a P,
    arms: GaussianArms,
    estimates: Estimates,
    rng: SmallRng,
}

/// Terminal state of a trial: the recorded trajectory plus the final
/// per-arm statistics.
pub struct Completed {
    pub trajectory: Trajectory,
    pub estimates: Estimates,
}

impl<'a, P: Policy> Simulation<'a, P> {
    pub fn new(policy: &'a P, arms: usize, mu: f64, spread: f64, seed: u64) -> BanditResult<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let arms = GaussianArms::draw(arms, mu, spread, &mut rng)?;
        let estimates = Estimates::new(arms.arms(), policy.initial());
        Ok(Self {
            policy,
            arms,
            estimates,
            rng,
        })
    }

    /// Drive the trial: pull, observe, update, record, `iterations` times.
    pub fn run(mut self, iterations: usize) -> BanditResult<Completed> {
        if iterations == 0 {
            return Err(BanditError::InvalidIterationCount);
        }
        let mut trajectory = Vec::with_capacity(iterations);
        for step in 0..iterations {
            let arm = self.policy.select(&self.estimates, step, &mut self.rng);
            let reward = self.arms.sample(arm, &mut self.rng);
            self.estimates.update(arm, reward);
            trajectory.push(reward);
        }
        Ok(Completed {
            trajectory,
            estimates: self.estimates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandit::greedy::EpsilonGreedy;
    use crate::bandit::ucb::Ucb;

    #[test]
    fn trajectory_length_matches_iterations() {
        let policy = EpsilonGreedy::new(0.1).unwrap();
        let done = Simulation::new(&policy, 10, 0., 3., 99)
            .unwrap()
            .run(250)
            .unwrap();
        assert!(done.trajectory.len() == 250);
    }

    #[test]
    fn rejects_zero_iterations() {
        let policy = EpsilonGreedy::new(0.1).unwrap();
        let simulation = Simulation::new(&policy, 10, 0., 3., 99).unwrap();
        assert!(matches!(
            simulation.run(0),
            Err(BanditError::InvalidIterationCount)
        ));
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let policy = EpsilonGreedy::new(0.2).unwrap();
        let a = Simulation::new(&policy, 5, 0., 3., 1234)
            .unwrap()
            .run(100)
            .unwrap();
        let b = Simulation::new(&policy, 5, 0., 3., 1234)
            .unwrap()
            .run(100)
            .unwrap();
        assert!(a.trajectory == b.trajectory);
    }

    #[test]
    fn ucb_pulls_every_arm_within_the_first_round() {
        let policy = Ucb::new(2.);
        let arms = 7;
        let done = Simulation::new(&policy, arms, 0., 3., 5)
            .unwrap()
            .run(arms)
            .unwrap();
        assert!((0..arms).all(|a| done.estimates.count(a) == 1));
    }

    #[test]
    fn flat_zero_means_keep_rewards_near_zero() {
        // both true means pinned at 0 (spread 0), noise 1: every reward is a
        // unit Gaussian around 0 no matter which arm gets pulled, so the run
        // average sits near 0 and well-sampled estimates converge toward it
        let policy = EpsilonGreedy::new(0.1).unwrap();
        for seed in 0..20 {
            let done = Simulation::new(&policy, 2, 0., 0., seed)
                .unwrap()
                .run(100)
                .unwrap();
            let mean = done.trajectory.iter().sum::<f64>() / 100.;
            // 5 sigma of a 100-sample unit-noise average
            assert!(mean.abs() < 0.5);
            for arm in 0..2 {
                if done.estimates.count(arm) >= 16 {
                    assert!(done.estimates.value(arm).abs() < 1.);
                }
            }
        }
    }
}
