mod utils;

pub use smart_leds::hsv::hsv2rgb;
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{add_saturating, channel_sum, gamma_correct, rgb_to_rgbw, scale_rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;
