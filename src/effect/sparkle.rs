//! Random twinkle sparkles.
//!
//! A sparkle ignites at a random chaser-range pixel with a dim random
//! colour and re-adds that colour into the pixel every time its slot
//! fires, so the pixel brightens additively. Once any channel's
//! unclamped sum exceeds the cap, the slot goes dormant and leaves the
//! pixel "hot" for the decay engine to pull back down.

use heapless::Vec;

use crate::EntropySource;
use crate::color::{Rgb, add_saturating};
use crate::math8::Fraction;

/// Capacity of the sparkle slot array.
pub const MAX_SPARKLE_SLOTS: usize = 4;

/// Chaser-range pixel indices currently claimed by active sparkles;
/// the decay engine skips these.
pub type SparkleClaims = Vec<u16, MAX_SPARKLE_SLOTS>;

/// Sparkle engine configuration.
#[derive(Debug, Clone)]
pub struct SparkleConfig {
    /// Number of sparkle slots in use (clamped to
    /// [`MAX_SPARKLE_SLOTS`]).
    pub slots: usize,
    /// Per-slot, per-tick ignition/accumulation chance.
    pub chance: Fraction,
    /// Channel cap; exceeding it (on the unclamped sum) retires the
    /// slot.
    pub max_value: u8,
    /// Inclusive lower bound for each random colour channel.
    pub colour_min: u8,
    /// Exclusive upper bound for each random colour channel.
    pub colour_max: u8,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            slots: 1,
            chance: Fraction::new(1, 8),
            max_value: 192,
            colour_min: 32,
            colour_max: 64,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Sparkle {
    position: Option<u16>,
    colour: Rgb,
}

/// Ignites and accumulates twinkle points.
#[derive(Debug)]
pub struct SparkleEngine {
    slots: Vec<Sparkle, MAX_SPARKLE_SLOTS>,
    chance: Fraction,
    max_value: u8,
    colour_min: u8,
    colour_max: u8,
    range_len: u16,
}

impl SparkleEngine {
    pub fn new(config: &SparkleConfig, range_len: u16) -> Self {
        let count = config.slots.min(MAX_SPARKLE_SLOTS);
        let mut slots = Vec::new();
        for _ in 0..count {
            let _ = slots.push(Sparkle::default());
        }
        Self {
            slots,
            chance: config.chance,
            max_value: config.max_value,
            colour_min: config.colour_min,
            colour_max: config.colour_max,
            range_len,
        }
    }

    /// Run one sparkle tick over the chaser range.
    ///
    /// Each slot rolls its chance; on a hit, a dormant slot ignites at
    /// a random pixel, then the slot's colour is added into its pixel.
    /// The cap check runs on the unclamped channel sums; the stored
    /// pixel saturates at 255, so one tick of transient overshoot
    /// above the cap is visible until decay acts.
    pub fn tick<E: EntropySource>(&mut self, pixels: &mut [Rgb], rng: &mut E) {
        for slot in &mut self.slots {
            if !self.chance.roll(rng) {
                continue;
            }
            let pos = match slot.position {
                Some(pos) => pos,
                None => {
                    #[allow(clippy::cast_possible_truncation)]
                    let pos = rng.uniform(0, u32::from(self.range_len)) as u16;
                    slot.position = Some(pos);
                    slot.colour = random_dim_colour(rng, self.colour_min, self.colour_max);
                    pos
                }
            };
            let Some(px) = pixels.get_mut(pos as usize) else {
                continue;
            };
            let r = u16::from(px.r) + u16::from(slot.colour.r);
            let g = u16::from(px.g) + u16::from(slot.colour.g);
            let b = u16::from(px.b) + u16::from(slot.colour.b);
            *px = add_saturating(*px, slot.colour);
            let cap = u16::from(self.max_value);
            if r > cap || g > cap || b > cap {
                slot.position = None;
            }
        }
    }

    /// Whether any slot holds an igniting sparkle.
    pub fn any_active(&self) -> bool {
        self.slots.iter().any(|s| s.position.is_some())
    }

    /// Collect the pixel indices claimed by active sparkles.
    pub fn claims(&self) -> SparkleClaims {
        let mut claims = SparkleClaims::new();
        for slot in &self.slots {
            if let Some(pos) = slot.position {
                let _ = claims.push(pos);
            }
        }
        claims
    }
}

fn random_dim_colour<E: EntropySource>(rng: &mut E, min: u8, max: u8) -> Rgb {
    #[allow(clippy::cast_possible_truncation)]
    let mut channel = || rng.uniform(u32::from(min), u32::from(max)) as u8;
    Rgb {
        r: channel(),
        g: channel(),
        b: channel(),
    }
}
