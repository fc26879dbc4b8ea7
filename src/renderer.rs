use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::EntropySource;
use crate::color::{Rgb, scale_rgb};
use crate::effect::{
    ChaserConfig, ChaserEngine, DecayConfig, MAX_CHASER_SLOTS, MAX_SPARKLE_SLOTS, SparkleConfig,
    SparkleEngine, TopAnimator, TopConfig, decay,
};
use crate::input::{IdleCheck, IdleConfig, IdleController};
use crate::layout::StripLayout;
use crate::tick::Tick;
use crate::trigger::{Trigger, TriggerReceiver};

/// Animation cadences, in milliseconds per visible frame.
///
/// The outer loop free-runs much faster than either of these so the
/// button and idle checks stay responsive; the renderer only advances
/// the animation when the current cadence says a frame is due.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimings {
    /// Frame interval while at least one chaser is traveling.
    pub fast_ms: u32,
    /// Frame interval otherwise (sparkle/decay only).
    pub slow_ms: u32,
}

impl Default for FrameTimings {
    fn default() -> Self {
        Self {
            fast_ms: 15,
            slow_ms: 60,
        }
    }
}

/// Configuration for the whole engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Pixels in the chaser range.
    pub chaser_len: u16,
    /// Global output brightness scalar (255 = full).
    pub brightness: u8,
    pub chaser: ChaserConfig,
    pub sparkle: SparkleConfig,
    pub decay: DecayConfig,
    /// Present when the strip has a top indicator segment.
    pub top: Option<TopConfig>,
    pub idle: IdleConfig,
    pub timings: FrameTimings,
}

impl EngineConfig {
    /// A 60-pixel strip with the stock chaser setup.
    pub fn strip_60() -> Self {
        Self {
            chaser_len: 60,
            brightness: 77,
            ..Self::default()
        }
    }

    /// Total buffer slots this configuration needs.
    pub fn required_slots(&self) -> usize {
        let top = self.top.as_ref().map_or(0, TopConfig::slot_count);
        self.chaser_len as usize + top
    }

    /// Validate against a buffer of `capacity` slots.
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.chaser_len == 0 {
            return Err(ConfigError::EmptyChaserRange);
        }
        if self.chaser.slots == 0 || self.chaser.slots > MAX_CHASER_SLOTS {
            return Err(ConfigError::BadChaserSlots(self.chaser.slots));
        }
        if self.sparkle.slots > MAX_SPARKLE_SLOTS {
            return Err(ConfigError::BadSparkleSlots(self.sparkle.slots));
        }
        let required = self.required_slots();
        if required > capacity {
            return Err(ConfigError::BufferTooSmall { required, capacity });
        }
        Ok(())
    }
}

/// A configuration the engine refuses to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The chaser range must hold at least one pixel.
    EmptyChaserRange,
    /// Chaser slot count of zero or beyond [`MAX_CHASER_SLOTS`].
    BadChaserSlots(usize),
    /// Sparkle slot count beyond [`MAX_SPARKLE_SLOTS`].
    BadSparkleSlots(usize),
    /// The layout does not fit the compile-time buffer capacity.
    BufferTooSmall { required: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChaserRange => write!(f, "chaser range is empty"),
            Self::BadChaserSlots(slots) => {
                write!(f, "chaser slot count {slots} out of range")
            }
            Self::BadSparkleSlots(slots) => {
                write!(f, "sparkle slot count {slots} out of range")
            }
            Self::BufferTooSmall { required, capacity } => {
                write!(f, "layout needs {required} slots, buffer holds {capacity}")
            }
        }
    }
}

/// The animation engine orchestrator.
///
/// Owns the pixel buffer and runs the per-tick pipeline: button/idle
/// first, then chaser spawn/advance, sparkle, decay, top segment, and
/// finally the brightness-scaled output copy. `MAX_LEDS` is the
/// compile-time buffer capacity; the configured layout may use less.
pub struct Renderer<'a, const MAX_LEDS: usize, const TRIGGER_CHANNEL_SIZE: usize> {
    triggers: TriggerReceiver<'a, TRIGGER_CHANNEL_SIZE>,
    layout: StripLayout,
    brightness: u8,
    timings: FrameTimings,

    /// Retained animation state; decay math must see raw values, so
    /// brightness scaling never touches this buffer.
    pixels: [Rgb; MAX_LEDS],
    /// Scaled copy handed to the output driver.
    frame: [Rgb; MAX_LEDS],

    chasers: ChaserEngine,
    sparkles: SparkleEngine,
    decay: DecayConfig,
    top: Option<TopAnimator>,
    idle: IdleController,
    next_frame: Option<Tick>,
}

impl<'a, const MAX_LEDS: usize, const TRIGGER_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, TRIGGER_CHANNEL_SIZE>
{
    /// Create an engine from a validated configuration.
    pub fn new(
        triggers: TriggerReceiver<'a, TRIGGER_CHANNEL_SIZE>,
        config: &EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate(MAX_LEDS)?;
        let top_slots = config.top.as_ref().map_or(0, TopConfig::slot_count);
        #[allow(clippy::cast_possible_truncation)]
        let layout = StripLayout::new(config.chaser_len, top_slots as u16);
        Ok(Self {
            triggers,
            layout,
            brightness: config.brightness,
            timings: config.timings,
            pixels: [Rgb::default(); MAX_LEDS],
            frame: [Rgb::default(); MAX_LEDS],
            chasers: ChaserEngine::new(&config.chaser, config.chaser_len),
            sparkles: SparkleEngine::new(&config.sparkle, config.chaser_len),
            decay: config.decay,
            top: config.top.clone().map(TopAnimator::new),
            idle: IdleController::new(config.idle.clone()),
            next_frame: None,
        })
    }

    /// Run one outer tick.
    ///
    /// Returns the frame to flush, or `None` when there is nothing to
    /// transmit this iteration (animation not yet due, or idle).
    /// `now` is the wrapping millisecond tick, `now_secs` the coarse
    /// non-wrapping seconds clock, `button_level` the raw input level.
    pub fn render<E: EntropySource>(
        &mut self,
        now: Tick,
        now_secs: u64,
        button_level: bool,
        rng: &mut E,
    ) -> Option<&[Rgb]> {
        // Button and triggers come first: a click may wake the strip
        // and must never be lost to animation pacing.
        let mut fire = self.idle.poll_button(button_level, now);
        while let Some(trigger) = self.triggers.try_receive() {
            match trigger {
                Trigger::FireChaser => fire = true,
                Trigger::Wake => self.idle.note_activity(now_secs),
            }
        }
        if fire {
            #[cfg(feature = "esp32-log")]
            if self.idle.is_idle() {
                println!("wake: button press");
            }
            self.idle.note_activity(now_secs);
        }

        match self.idle.check(now_secs) {
            IdleCheck::Active => {}
            IdleCheck::Entered => {
                #[cfg(feature = "esp32-log")]
                println!("idle: blanking strip");
                return Some(self.blank());
            }
            IdleCheck::Idle => return None,
        }

        // Animation pacing; a forced spawn renders immediately.
        if !fire {
            if let Some(deadline) = self.next_frame {
                if now.is_before(deadline) {
                    return None;
                }
            }
        }

        if fire || self.chasers.spawn_due(now) {
            self.chasers.spawn(now, rng);
        }

        let (chaser_px, top_px) = self.layout.split(&mut self.pixels);
        let reached = self.chasers.advance(chaser_px);
        let chasing = self.chasers.any_active();

        // The two foreground effects are mutually exclusive; decay and
        // idle tracking run in both modes.
        if !chasing {
            self.sparkles.tick(chaser_px, rng);
        }

        let params = if chasing {
            self.decay.active
        } else {
            self.decay.calm
        };
        let claims = self.sparkles.claims();
        decay(chaser_px, &claims, params, rng);

        if let Some(top) = &mut self.top {
            top.tick(reached > 0, top_px);
        }

        let interval = if chasing {
            self.timings.fast_ms
        } else {
            self.timings.slow_ms
        };
        self.next_frame = Some(now.add(interval));

        let total = self.layout.total();
        for (dst, src) in self.frame[..total].iter_mut().zip(&self.pixels[..total]) {
            *dst = scale_rgb(*src, self.brightness);
        }
        Some(&self.frame[..total])
    }

    /// Whether the engine is in idle mode.
    pub const fn is_idle(&self) -> bool {
        self.idle.is_idle()
    }

    /// The chaser engine, for observation.
    pub const fn chasers(&self) -> &ChaserEngine {
        &self.chasers
    }

    /// The sparkle engine, for observation.
    pub const fn sparkles(&self) -> &SparkleEngine {
        &self.sparkles
    }

    /// The top animator, when the strip has a top segment.
    pub const fn top(&self) -> Option<&TopAnimator> {
        self.top.as_ref()
    }

    /// The configured strip layout.
    pub const fn layout(&self) -> StripLayout {
        self.layout
    }

    fn blank(&mut self) -> &[Rgb] {
        // A stale pacing deadline is meaningless (and wraparound-unsafe)
        // after a long idle stretch.
        self.next_frame = None;
        let total = self.layout.total();
        self.pixels[..total].fill(Rgb::default());
        self.frame[..total].fill(Rgb::default());
        &self.frame[..total]
    }
}
