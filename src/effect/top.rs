//! Top-segment indicator animation.
//!
//! The top segment shows a slowly rotating hue whose brightness spikes
//! to a ceiling whenever a chaser reaches the end of the strip, then
//! fades back toward a floor. The segment may be wired as RGBW; its
//! logical pixels are then packed byte-wise into the RGB-addressed
//! buffer slots, padded upward when the byte count is not a multiple
//! of three.

use crate::color::{Hsv, Rgb, gamma_correct, hsv2rgb, rgb_to_rgbw};

/// Top-segment configuration.
#[derive(Debug, Clone)]
pub struct TopConfig {
    /// Logical pixel count of the segment.
    pub count: u16,
    /// Whether the segment hardware carries a fourth (white) channel.
    pub rgbw: bool,
    /// Fixed saturation for the rotating hue.
    pub saturation: u8,
    /// Brightness the segment settles at.
    pub floor: u8,
    /// Brightness on a "chaser reached end" spike.
    pub ceiling: u8,
    /// Brightness decay per animator tick.
    pub fade_step: u8,
    /// Hue advance per animator tick (wrapping).
    pub hue_step: u8,
}

impl Default for TopConfig {
    fn default() -> Self {
        Self {
            count: 4,
            rgbw: true,
            saturation: 255,
            floor: 24,
            ceiling: 255,
            fade_step: 4,
            hue_step: 1,
        }
    }
}

impl TopConfig {
    /// Buffer slots the segment occupies in the RGB addressing scheme.
    ///
    /// An RGBW pixel takes four bytes, so the byte stream is padded
    /// upward to the next whole three-byte slot.
    pub const fn slot_count(&self) -> usize {
        let count = self.count as usize;
        if self.rgbw { (count * 4).div_ceil(3) } else { count }
    }
}

/// Animates the top segment.
#[derive(Debug)]
pub struct TopAnimator {
    config: TopConfig,
    hue: u8,
    brightness: u8,
}

impl TopAnimator {
    pub fn new(config: TopConfig) -> Self {
        let brightness = config.floor;
        Self {
            config,
            hue: 0,
            brightness,
        }
    }

    /// Current hue cursor.
    pub const fn hue(&self) -> u8 {
        self.hue
    }

    /// Current brightness.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Run one animator tick and repaint the segment's buffer slots.
    pub fn tick(&mut self, chaser_reached: bool, out: &mut [Rgb]) {
        if chaser_reached {
            self.brightness = self.config.ceiling;
        } else {
            self.brightness = self
                .brightness
                .saturating_sub(self.config.fade_step)
                .max(self.config.floor);
        }
        self.hue = self.hue.wrapping_add(self.config.hue_step);

        let colour = gamma_correct(hsv2rgb(Hsv {
            hue: self.hue,
            sat: self.config.saturation,
            val: self.brightness,
        }));

        if self.config.rgbw {
            let (rgb, w) = rgb_to_rgbw(colour);
            pack_replicated(out, &[rgb.r, rgb.g, rgb.b, w], self.config.count as usize);
        } else {
            let count = (self.config.count as usize).min(out.len());
            for px in &mut out[..count] {
                *px = colour;
            }
        }
    }
}

/// Write `count` copies of `group` into `out` as a flat byte stream,
/// three bytes per slot, zero-padding the tail.
fn pack_replicated(out: &mut [Rgb], group: &[u8], count: usize) {
    let total_bytes = group.len() * count;
    let byte_at = |index: usize| {
        if index < total_bytes {
            group[index % group.len()]
        } else {
            0
        }
    };
    for (slot_index, slot) in out.iter_mut().enumerate() {
        let base = slot_index * 3;
        *slot = Rgb {
            r: byte_at(base),
            g: byte_at(base + 1),
            b: byte_at(base + 2),
        };
    }
}
