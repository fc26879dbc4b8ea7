//! Default entropy source backed by `fastrand`.

use crate::EntropySource;

/// [`EntropySource`] implementation over a seeded `fastrand::Rng`.
///
/// Seed it from something that varies between boots, e.g. the timer
/// tick count at startup.
pub struct FastrandEntropy {
    rng: fastrand::Rng,
}

impl FastrandEntropy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl EntropySource for FastrandEntropy {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.u32(low..high)
    }
}
