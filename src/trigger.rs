//! On-demand trigger channel.
//!
//! Lets an interrupt handler or a companion task fire a chaser or wake
//! the strip without touching engine state directly. Built on
//! `critical-section` and `heapless::Deque`, so it is safe to send
//! from interrupt context; the renderer drains it once per outer tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// External stimulus injected into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Behave like an accepted button press: refresh the idle timer
    /// and force a chaser spawn.
    FireChaser,
    /// Refresh the idle timer only, e.g. from a motion sensor.
    Wake,
}

/// Error returned when sending to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerQueueFull(pub Trigger);

/// A bounded, interrupt-safe queue of [`Trigger`]s.
pub struct TriggerChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Trigger, SIZE>>>,
}

impl<const SIZE: usize> TriggerChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share the same queue.
    pub const fn sender(&self) -> TriggerSender<'_, SIZE> {
        TriggerSender { channel: self }
    }

    /// Get the receiver handle the renderer drains.
    pub const fn receiver(&self) -> TriggerReceiver<'_, SIZE> {
        TriggerReceiver { channel: self }
    }

    fn try_send(&self, trigger: Trigger) -> Result<(), TriggerQueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(trigger).map_err(TriggerQueueFull)
        })
    }

    fn try_receive(&self) -> Option<Trigger> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for TriggerChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`TriggerChannel`].
#[derive(Clone, Copy)]
pub struct TriggerSender<'a, const SIZE: usize> {
    channel: &'a TriggerChannel<SIZE>,
}

impl<const SIZE: usize> TriggerSender<'_, SIZE> {
    /// Enqueue a trigger.
    ///
    /// Returns `Err(TriggerQueueFull(trigger))` if the queue is full.
    pub fn try_send(&self, trigger: Trigger) -> Result<(), TriggerQueueFull> {
        self.channel.try_send(trigger)
    }
}

/// A receiver handle for a [`TriggerChannel`].
#[derive(Clone, Copy)]
pub struct TriggerReceiver<'a, const SIZE: usize> {
    channel: &'a TriggerChannel<SIZE>,
}

impl<const SIZE: usize> TriggerReceiver<'_, SIZE> {
    /// Dequeue the next pending trigger, if any.
    pub fn try_receive(&self) -> Option<Trigger> {
        self.channel.try_receive()
    }
}
