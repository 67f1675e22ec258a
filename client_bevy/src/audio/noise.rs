use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded white noise in [-1, 1).
#[derive(Debug, Clone)]
pub(crate) struct WhiteNoise {
    rng: ChaCha8Rng,
}

impl WhiteNoise {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub(crate) fn next_sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0..1.0)
    }
}
