use crate::EntropySource;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// An integer ratio used for probability rolls and decay factors.
///
/// A zero denominator is a defined "never" / "no-op", not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub num: u32,
    pub den: u32,
}

impl Fraction {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// A ratio that never fires and scales nothing.
    pub const ZERO: Self = Self { num: 0, den: 0 };

    /// True when a roll can never fire.
    pub const fn is_zero(self) -> bool {
        self.num == 0 || self.den == 0
    }

    /// Draw one integer in `[0, den)` and fire when it lands below
    /// `num`.
    pub fn roll<E: EntropySource>(self, rng: &mut E) -> bool {
        if self.is_zero() {
            return false;
        }
        rng.uniform(0, self.den) < self.num
    }

    /// Multiply `value` by the ratio with truncating (floor) division,
    /// clamped to the 8-bit range.
    ///
    /// Floor semantics are load-bearing: round-to-nearest changes the
    /// decay-tail length.
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn scale_down(self, value: u8) -> u8 {
        if self.den == 0 {
            return value;
        }
        let scaled = value as u32 * self.num / self.den;
        if scaled > 255 { 255 } else { scaled as u8 }
    }
}
