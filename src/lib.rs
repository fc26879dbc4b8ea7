#![no_std]

pub mod color;
pub mod effect;
pub mod entropy;
pub mod input;
pub mod layout;
pub mod math8;
pub mod renderer;
pub mod scheduler;
pub mod tick;
pub mod trigger;

pub use color::{Hsv, Rgb};
pub use effect::{
    ChaserConfig, ChaserEngine, DecayConfig, DecayParams, SparkleConfig, SparkleEngine,
    TopAnimator, TopConfig,
};
pub use entropy::FastrandEntropy;
pub use input::{IdleCheck, IdleConfig, IdleController};
pub use layout::StripLayout;
pub use math8::Fraction;
pub use renderer::{ConfigError, EngineConfig, FrameTimings, Renderer};
pub use scheduler::{LoopResult, TickScheduler};
pub use tick::{TICK_PERIOD, Tick};
pub use trigger::{Trigger, TriggerChannel, TriggerReceiver, TriggerSender};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait; `write` is the "flush" that
/// pushes a completed frame to the strip.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Abstract digital input trait for the chaser button.
///
/// Returns the raw line level; polarity is interpreted by
/// [`IdleConfig::active_low`].
pub trait InputDriver {
    /// Read the current input level
    fn read(&mut self) -> bool;
}

/// Abstract uniform entropy source.
///
/// Every probabilistic decision in the engine draws from this, which
/// keeps the animation deterministic under test.
pub trait EntropySource {
    /// Draw a uniform integer in `[low, high)`. Implementations return
    /// `low` when the range is empty.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}
