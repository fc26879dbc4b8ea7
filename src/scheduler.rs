//! Outer-loop glue and timing.
//!
//! Provides portable loop pacing without async/await or
//! platform-specific timers. The caller is responsible for
//! sleeping/waiting between iterations.
//!
//! Unlike a fixed-FPS frame scheduler, the loop here free-runs at a
//! short poll interval so button debounce and idle checks see every
//! iteration; the renderer gates the visible animation internally on
//! its fast/slow cadence.

use embassy_time::{Duration, Instant};

use crate::renderer::Renderer;
use crate::tick::Tick;
use crate::{EntropySource, InputDriver, OutputDriver};

/// Default poll interval between outer-loop iterations (5 ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Result of one outer-loop iteration.
#[derive(Debug, Clone, Copy)]
pub struct LoopResult {
    /// The deadline for the next iteration.
    pub next_deadline: Instant,
    /// How long to wait until the next iteration.
    pub sleep_duration: Duration,
    /// Whether a frame was transmitted this iteration.
    pub flushed: bool,
}

/// Drives the renderer against the hardware collaborators.
///
/// # Usage
///
/// ```ignore
/// let channel = TriggerChannel::new();
/// let renderer = Renderer::new(channel.receiver(), &config)?;
/// let mut scheduler = TickScheduler::new(renderer, button, strip, entropy);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<
    'a,
    I: InputDriver,
    O: OutputDriver,
    E: EntropySource,
    const MAX_LEDS: usize,
    const TRIGGER_CHANNEL_SIZE: usize,
> {
    input: I,
    output: O,
    entropy: E,
    renderer: Renderer<'a, MAX_LEDS, TRIGGER_CHANNEL_SIZE>,
    poll_interval: Duration,
}

impl<
    'a,
    I: InputDriver,
    O: OutputDriver,
    E: EntropySource,
    const MAX_LEDS: usize,
    const TRIGGER_CHANNEL_SIZE: usize,
> TickScheduler<'a, I, O, E, MAX_LEDS, TRIGGER_CHANNEL_SIZE>
{
    /// Create a scheduler with [`DEFAULT_POLL_INTERVAL`].
    pub fn new(
        renderer: Renderer<'a, MAX_LEDS, TRIGGER_CHANNEL_SIZE>,
        input: I,
        output: O,
        entropy: E,
    ) -> Self {
        Self::with_poll_interval(renderer, input, output, entropy, DEFAULT_POLL_INTERVAL)
    }

    /// Create a scheduler with a custom poll interval.
    pub fn with_poll_interval(
        renderer: Renderer<'a, MAX_LEDS, TRIGGER_CHANNEL_SIZE>,
        input: I,
        output: O,
        entropy: E,
        poll_interval: Duration,
    ) -> Self {
        Self {
            input,
            output,
            entropy,
            renderer,
            poll_interval,
        }
    }

    /// Run one outer-loop iteration.
    ///
    /// Polls the button, derives both clock domains from `now`, runs
    /// the renderer, and flushes the frame to the output driver when
    /// one is due. The flush happens at most once per iteration.
    pub fn tick(&mut self, now: Instant) -> LoopResult {
        let tick = Tick::from_millis(now.as_millis());
        let level = self.input.read();
        let frame = self
            .renderer
            .render(tick, now.as_secs(), level, &mut self.entropy);
        let flushed = frame.is_some();
        if let Some(frame) = frame {
            self.output.write(frame);
        }
        LoopResult {
            next_deadline: now + self.poll_interval,
            sleep_duration: self.poll_interval,
            flushed,
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, MAX_LEDS, TRIGGER_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS, TRIGGER_CHANNEL_SIZE> {
        &mut self.renderer
    }
}
