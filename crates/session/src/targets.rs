use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform integer source for new targets.
pub trait TargetSource {
    /// Returns a value in `min..=max`.
    fn sample(&mut self, min: u32, max: u32) -> u32;
}

#[derive(Debug, Clone)]
pub struct RandomTargets {
    rng: StdRng,
}

impl RandomTargets {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for RandomTargets {
    fn sample(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

#[cfg(test)]
#[path = "tests/targets_tests.rs"]
mod tests;
