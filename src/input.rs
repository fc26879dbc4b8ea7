//! Debounced button input and the idle-timeout state machine.
//!
//! The button is polled at full loop rate in the wrapping tick domain;
//! accepted presses are rate-limited by a debounce deadline. The idle
//! deadline lives in the coarse, non-wrapping seconds domain, and the
//! two clock domains never mix.

use crate::tick::Tick;

/// Idle/button controller configuration.
#[derive(Debug, Clone)]
pub struct IdleConfig {
    /// Disable to keep the strip animating forever.
    pub enabled: bool,
    /// Seconds added to the idle deadline per accepted press.
    pub delta_secs: u64,
    /// The deadline never extends further than this many seconds from
    /// now. Also the initial timeout after boot.
    pub max_horizon_secs: u64,
    /// Window during which repeated press detections are suppressed.
    pub debounce_ms: u32,
    /// True when the button pulls the line to ground on press.
    pub active_low: bool,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delta_secs: 60,
            max_horizon_secs: 300,
            debounce_ms: 200,
            active_low: true,
        }
    }
}

/// Outcome of the per-tick idle check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleCheck {
    /// Keep animating.
    Active,
    /// The deadline just expired: blank the strip, flush once, then
    /// stop working.
    Entered,
    /// Already idle; skip the whole tick.
    Idle,
}

/// Tracks button debounce and the active/idle state machine.
#[derive(Debug)]
pub struct IdleController {
    config: IdleConfig,
    idle: bool,
    /// Seconds deadline; lazily initialised to `now + max_horizon` on
    /// the first check so boot time does not need to be known here.
    deadline_secs: Option<u64>,
    debounce_until: Option<Tick>,
}

impl IdleController {
    pub fn new(config: IdleConfig) -> Self {
        Self {
            config,
            idle: false,
            deadline_secs: None,
            debounce_until: None,
        }
    }

    /// Interpret a raw input level, reporting a debounced click.
    ///
    /// Only the logical "pressed" level counts, and only when the
    /// debounce deadline has passed; an accepted click arms the next
    /// deadline.
    pub fn poll_button(&mut self, raw_level: bool, now: Tick) -> bool {
        let pressed = if self.config.active_low {
            !raw_level
        } else {
            raw_level
        };
        if !pressed {
            return false;
        }
        if let Some(deadline) = self.debounce_until {
            if now.is_before(deadline) {
                return false;
            }
        }
        self.debounce_until = Some(now.add(self.config.debounce_ms));
        true
    }

    /// Register activity: wake from idle and push the deadline out by
    /// `delta_secs`, clamped to `max_horizon_secs` from now.
    pub fn note_activity(&mut self, now_secs: u64) {
        self.idle = false;
        let base = match self.deadline_secs {
            Some(deadline) => deadline.max(now_secs),
            None => now_secs,
        };
        let extended = base + self.config.delta_secs;
        self.deadline_secs = Some(extended.min(now_secs + self.config.max_horizon_secs));
    }

    /// Check the idle deadline, transitioning to idle when it expires.
    pub fn check(&mut self, now_secs: u64) -> IdleCheck {
        if !self.config.enabled {
            return IdleCheck::Active;
        }
        if self.idle {
            return IdleCheck::Idle;
        }
        let deadline = *self
            .deadline_secs
            .get_or_insert(now_secs + self.config.max_horizon_secs);
        if now_secs >= deadline {
            self.idle = true;
            IdleCheck::Entered
        } else {
            IdleCheck::Active
        }
    }

    /// Whether the controller is currently idle.
    pub const fn is_idle(&self) -> bool {
        self.idle
    }
}
