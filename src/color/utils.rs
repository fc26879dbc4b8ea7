use smart_leds::gamma;

use crate::{color::Rgb, math8::scale8};

/// Add two colors channel-wise, saturating at 255.
#[inline]
pub fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Sum of the three channels, widened so it cannot overflow.
#[inline]
pub fn channel_sum(c: Rgb) -> u16 {
    u16::from(c.r) + u16::from(c.g) + u16::from(c.b)
}

/// Scale all channels by an 8-bit factor (255 = identity).
#[inline]
pub fn scale_rgb(c: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(c.r, scale),
        g: scale8(c.g, scale),
        b: scale8(c.b, scale),
    }
}

/// Apply the WS2812 gamma curve to a single color.
pub fn gamma_correct(c: Rgb) -> Rgb {
    gamma(core::iter::once(c)).next().unwrap_or(c)
}

/// Decompose an RGB color into RGB + white.
///
/// The white channel takes the common component `min(r, g, b)`, which
/// is subtracted back out of the color channels.
pub fn rgb_to_rgbw(c: Rgb) -> (Rgb, u8) {
    let w = c.r.min(c.g).min(c.b);
    (
        Rgb {
            r: c.r - w,
            g: c.g - w,
            b: c.b - w,
        },
        w,
    )
}
