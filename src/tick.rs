//! Wraparound-safe millisecond tick arithmetic.
//!
//! The hardware millisecond counter wraps at a fixed period (about 6.2
//! days at the default 2^29 ms), so plain subtraction and ordering
//! comparisons between raw counter values are wrong near the wrap
//! point. [`Tick`] encapsulates the counter and offers the only three
//! legal operations on it: [`Tick::add`], [`Tick::diff`] and
//! [`Tick::is_before`].
//!
//! All pacing and debounce deadlines in the engine live in this domain.
//! The coarse seconds clock used for idle deadlines is a separate,
//! non-wrapping domain and never mixes with ticks.

/// Default tick period: 2^29 milliseconds.
pub const TICK_PERIOD: u32 = 1 << 29;

/// A monotonic millisecond counter value modulo `PERIOD`.
///
/// Two ticks may only be compared when their true distance is below
/// `PERIOD / 2`; every deadline the engine schedules is far shorter
/// than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick<const PERIOD: u32 = TICK_PERIOD>(u32);

impl<const PERIOD: u32> Tick<PERIOD> {
    /// Tick zero (boot).
    pub const ZERO: Self = Self(0);

    /// Wrap a raw counter value into the tick domain.
    pub const fn new(raw: u32) -> Self {
        Self(raw % PERIOD)
    }

    /// Wrap a 64-bit millisecond count (e.g. `Instant::as_millis`) into
    /// the tick domain.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_millis(ms: u64) -> Self {
        Self((ms % PERIOD as u64) as u32)
    }

    /// The wrapped counter value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Offset this tick forward by `delta` milliseconds, wrapping at
    /// the period.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn add(self, delta: u32) -> Self {
        Self(((self.0 as u64 + delta as u64) % PERIOD as u64) as u32)
    }

    /// Signed distance `self - other`, adjusted into
    /// `(-PERIOD / 2, PERIOD / 2]`.
    ///
    /// Valid only when the true distance between the two ticks is below
    /// half the period.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn diff(self, other: Self) -> i32 {
        let d = ((self.0 as u64 + PERIOD as u64 - other.0 as u64) % PERIOD as u64) as u32;
        if d > PERIOD / 2 {
            (d as i64 - PERIOD as i64) as i32
        } else {
            d as i32
        }
    }

    /// Whether this tick is strictly earlier than `other`, wraparound
    /// included.
    pub const fn is_before(self, other: Self) -> bool {
        self.diff(other) < 0
    }
}
