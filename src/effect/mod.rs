//! Animation engines.
//!
//! Each engine owns its slot state and mutates the pixel range handed
//! to it. Buffer ownership is strictly sequential within one outer
//! tick (chaser, then sparkle, then decay, then top), so no locking is
//! needed.

mod chaser;
mod decay;
mod sparkle;
mod top;

pub use chaser::{ChaserConfig, ChaserEngine, MAX_CHASER_SLOTS};
pub use decay::{DecayConfig, DecayParams, decay};
pub use sparkle::{MAX_SPARKLE_SLOTS, SparkleClaims, SparkleConfig, SparkleEngine};
pub use top::{TopAnimator, TopConfig};
