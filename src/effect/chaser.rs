//! Traveling chaser pulses.
//!
//! Up to [`MAX_CHASER_SLOTS`] independently tracked pulses travel from
//! the start of the chaser range to its end, one pixel per engine
//! invocation. A spacing policy keeps newly admitted chasers from
//! colliding with the trailing edge of an existing one.

use heapless::Vec;

use crate::EntropySource;
use crate::color::Rgb;
use crate::tick::Tick;

/// Capacity of the chaser slot array.
pub const MAX_CHASER_SLOTS: usize = 8;

/// Chaser engine configuration.
#[derive(Debug, Clone)]
pub struct ChaserConfig {
    /// Number of chaser slots in use (clamped to [`MAX_CHASER_SLOTS`]).
    pub slots: usize,
    /// Upper bound (exclusive, ms) for the random auto-spawn interval.
    pub max_spawn_interval_ms: u32,
    /// Inclusive lower bound for each random colour channel.
    pub colour_min: u8,
    /// Exclusive upper bound for each random colour channel.
    pub colour_max: u8,
}

impl Default for ChaserConfig {
    fn default() -> Self {
        Self {
            slots: 4,
            max_spawn_interval_ms: 6000,
            colour_min: 64,
            colour_max: 255,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Chaser {
    /// Index into the chaser range; `None` when the slot is dormant.
    position: Option<u16>,
    colour: Rgb,
}

/// Spawns, advances and retires traveling pulses.
#[derive(Debug)]
pub struct ChaserEngine {
    slots: Vec<Chaser, MAX_CHASER_SLOTS>,
    range_len: u16,
    min_spacing: u16,
    max_spawn_interval_ms: u32,
    colour_min: u8,
    colour_max: u8,
    /// Next auto-spawn deadline; `None` means due immediately, so the
    /// first tick after boot fires a chaser.
    next_spawn: Option<Tick>,
}

impl ChaserEngine {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(config: &ChaserConfig, range_len: u16) -> Self {
        let count = config.slots.min(MAX_CHASER_SLOTS);
        let mut slots = Vec::new();
        for _ in 0..count {
            let _ = slots.push(Chaser::default());
        }
        // A single slot cannot collide with itself; the spacing check
        // degenerates to the full range.
        let min_spacing = if count > 1 {
            range_len / (count as u16 - 1)
        } else {
            range_len
        };
        Self {
            slots,
            range_len,
            min_spacing,
            max_spawn_interval_ms: config.max_spawn_interval_ms,
            colour_min: config.colour_min,
            colour_max: config.colour_max,
            next_spawn: None,
        }
    }

    /// Minimum admission gap, `range_len / (slots - 1)` pixels.
    pub const fn min_spacing(&self) -> u16 {
        self.min_spacing
    }

    /// Whether the auto-spawn deadline has passed.
    pub fn spawn_due(&self, now: Tick) -> bool {
        match self.next_spawn {
            Some(deadline) => !now.is_before(deadline),
            None => true,
        }
    }

    /// Attempt to admit a new chaser, rescheduling the auto-spawn
    /// deadline whether or not one is admitted.
    ///
    /// A chaser is admitted into the first dormant slot only if the
    /// trailing edge of the pulses already running (the minimum active
    /// position) has traveled past the minimum spacing, or no chaser
    /// is active at all. Returns whether a chaser was admitted.
    pub fn spawn<E: EntropySource>(&mut self, now: Tick, rng: &mut E) -> bool {
        let interval = rng.uniform(u32::from(self.min_spacing), self.max_spawn_interval_ms);
        self.next_spawn = Some(now.add(interval));

        let trailing = self
            .slots
            .iter()
            .filter_map(|c| c.position)
            .min()
            .unwrap_or(self.range_len);
        if self.any_active() && trailing <= self.min_spacing {
            return false;
        }

        let Some(slot) = self.slots.iter_mut().find(|c| c.position.is_none()) else {
            return false;
        };
        slot.position = Some(0);
        slot.colour = random_colour(rng, self.colour_min, self.colour_max);
        true
    }

    /// Paint every active chaser at its current position, then move it
    /// one pixel forward. A chaser stepping past the end of the range
    /// retires and counts as one "reached end" event.
    ///
    /// Returns the number of chasers that reached the end this tick.
    pub fn advance(&mut self, pixels: &mut [Rgb]) -> usize {
        let mut reached = 0;
        for chaser in &mut self.slots {
            let Some(pos) = chaser.position else {
                continue;
            };
            if let Some(px) = pixels.get_mut(pos as usize) {
                *px = chaser.colour;
            }
            let next = pos + 1;
            if next >= self.range_len {
                chaser.position = None;
                reached += 1;
            } else {
                chaser.position = Some(next);
            }
        }
        reached
    }

    /// Whether any slot holds a traveling chaser.
    pub fn any_active(&self) -> bool {
        self.slots.iter().any(|c| c.position.is_some())
    }

    /// Positions of all active chasers, in slot order.
    pub fn active_positions(&self) -> impl Iterator<Item = u16> + '_ {
        self.slots.iter().filter_map(|c| c.position)
    }
}

fn random_colour<E: EntropySource>(rng: &mut E, min: u8, max: u8) -> Rgb {
    #[allow(clippy::cast_possible_truncation)]
    let mut channel = || rng.uniform(u32::from(min), u32::from(max)) as u8;
    Rgb {
        r: channel(),
        g: channel(),
        b: channel(),
    }
}
