use crate::Rgb;

/// Partition of the pixel buffer into the chaser range and the
/// optional top-segment range.
///
/// The chaser range occupies indices `[0, chaser_len)`; the top range
/// occupies the `top_slots` buffer slots after it. The two ranges are
/// disjoint and together cover every slot the engine may write.
#[derive(Debug, Clone, Copy)]
pub struct StripLayout {
    chaser_len: u16,
    top_slots: u16,
}

impl StripLayout {
    pub const fn new(chaser_len: u16, top_slots: u16) -> Self {
        Self {
            chaser_len,
            top_slots,
        }
    }

    /// Number of pixels in the chaser range.
    pub const fn chaser_len(self) -> usize {
        self.chaser_len as usize
    }

    /// Number of buffer slots reserved for the top segment.
    pub const fn top_slots(self) -> usize {
        self.top_slots as usize
    }

    /// Total buffer slots in use.
    pub const fn total(self) -> usize {
        self.chaser_len() + self.top_slots()
    }

    /// Split a buffer into its chaser and top ranges.
    ///
    /// The buffer must hold at least [`StripLayout::total`] slots; the
    /// caller validates this once at configuration time.
    pub fn split(self, leds: &mut [Rgb]) -> (&mut [Rgb], &mut [Rgb]) {
        let (chaser, rest) = leds[..self.total()].split_at_mut(self.chaser_len());
        (chaser, rest)
    }
}
