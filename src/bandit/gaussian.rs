use super::error::BanditError;
use super::error::BanditResult;
use crate::Arm;
use crate::REWARD_NOISE;
use crate::Reward;
use rand::Rng;
use rand::rngs::SmallRng;
use rand_distr::Distribution;
use rand_distr::Normal;
use rand_distr::StandardNormal;

/// The hidden environment of one bandit instance.
///
/// One latent mean per arm, drawn from Normal(mu, spread) at construction and
/// fixed for the bandit's lifetime. Selectors never see the means directly;
/// they only observe rewards sampled at unit noise around them.
///
/// `spread` is the scale handed to the sampler (a standard deviation), which
/// is how the conventional `var` knob of this experiment behaves upstream.
#[derive(Debug, Clone)]
pub struct GaussianArms {
    means: Vec<Reward>,
}

impl GaussianArms {
    pub fn draw(arms: usize, mu: f64, spread: f64, rng: &mut SmallRng) -> BanditResult<Self> {
        if arms == 0 {
            return Err(BanditError::InvalidArmCount);
        }
        let latent = Normal::new(mu, spread).map_err(|_| BanditError::InvalidSpread(spread))?;
        Ok(Self {
            means: (0..arms).map(|_| latent.sample(rng)).collect(),
        })
    }

    pub fn arms(&self) -> usize {
        self.means.len()
    }

    /// True mean of an arm. Test and reporting surface only; policies must
    /// never be handed this.
    pub fn mean(&self, arm: Arm) -> Reward {
        self.means[arm]
    }

    /// One observed reward: latent mean plus unit Gaussian noise.
    pub fn sample(&self, arm: Arm, rng: &mut SmallRng) -> Reward {
        let noise: f64 = rng.sample(StandardNormal);
        self.means[arm] + REWARD_NOISE * noise
    }
}
