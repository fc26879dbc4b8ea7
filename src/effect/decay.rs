//! Probabilistic multiplicative pixel decay.
//!
//! Every lit, unreserved pixel in the chaser range rolls a chance each
//! tick; on a hit its channels are multiplied by the decay ratio with
//! truncating division. Pixels whose channel sum drops below 3 snap
//! fully off, so decay terminates in finite steps instead of leaving a
//! near-imperceptible residual glow.

use crate::EntropySource;
use crate::color::{Rgb, channel_sum};
use crate::math8::Fraction;

/// One mode's decay parameters.
#[derive(Debug, Clone, Copy)]
pub struct DecayParams {
    /// Per-pixel, per-tick chance of a decay step.
    pub chance: Fraction,
    /// Multiplicative factor applied on a hit (floor division).
    pub factor: Fraction,
}

impl DecayParams {
    pub const fn new(chance: Fraction, factor: Fraction) -> Self {
        Self { chance, factor }
    }
}

/// Per-mode decay parameter sets, selected once per engine tick based
/// on whether any chaser is active.
#[derive(Debug, Clone, Copy)]
pub struct DecayConfig {
    /// Faster, likelier set used while chasers run.
    pub active: DecayParams,
    /// Slower set for the calm (sparkle/idle-leaning) mode.
    pub calm: DecayParams,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            active: DecayParams::new(Fraction::new(1, 2), Fraction::new(1, 2)),
            calm: DecayParams::new(Fraction::new(1, 4), Fraction::new(3, 4)),
        }
    }
}

/// Apply one decay pass to `pixels`, skipping indices in `reserved`.
///
/// A zero denominator in either the chance or the factor makes the
/// whole pass a defined no-op.
pub fn decay<E: EntropySource>(
    pixels: &mut [Rgb],
    reserved: &[u16],
    params: DecayParams,
    rng: &mut E,
) {
    if params.chance.is_zero() || params.factor.den == 0 {
        return;
    }
    for (index, px) in pixels.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        if reserved.contains(&(index as u16)) {
            continue;
        }
        if channel_sum(*px) == 0 {
            continue;
        }
        if !params.chance.roll(rng) {
            continue;
        }
        px.r = params.factor.scale_down(px.r);
        px.g = params.factor.scale_down(px.g);
        px.b = params.factor.scale_down(px.b);
        if channel_sum(*px) < 3 {
            *px = Rgb::default();
        }
    }
}
