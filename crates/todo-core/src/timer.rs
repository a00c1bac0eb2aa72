//! Scheduled Callbacks
//!
//! The click counter never sleeps; it asks a `Scheduler` to deliver a
//! `TimerEvent` later and forgets about wall-clock time. The browser
//! scheduler backs this with real timeouts, `VirtualClock` with a
//! manually advanced clock.

use std::time::Duration;

/// Identity of one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// What a timer means when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Click window elapsed without another click
    IdleReset,
    /// Celebration overlay has been shown long enough
    CelebrationEnded,
}

/// Deferred, cancellable callbacks
pub trait Scheduler {
    /// Deliver `event` after `delay`
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Drop a pending callback; unknown or already fired handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}

// ========================
// Virtual Clock
// ========================

#[derive(Debug, Clone)]
struct PendingTimer {
    due: Duration,
    handle: TimerHandle,
    event: TimerEvent,
}

/// Deterministic scheduler driven by `advance`
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now: Duration,
    next_handle: u64,
    pending: Vec<PendingTimer>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of callbacks still waiting
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move time forward and return every callback that came due,
    /// earliest first (ties in scheduling order).
    pub fn advance(&mut self, by: Duration) -> Vec<(TimerHandle, TimerEvent)> {
        self.now += by;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = waiting;

        due.sort_by_key(|t| (t.due, t.handle));
        due.into_iter().map(|t| (t.handle, t.event)).collect()
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending.push(PendingTimer {
            due: self.now + delay,
            handle,
            event,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|t| t.handle != handle);
    }
}
