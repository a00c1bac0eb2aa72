//! Click Counter / Easter Egg
//!
//! Five clicks on the title, each within three seconds of the previous one,
//! show the celebration overlay for five seconds. The counter keeps running
//! during the celebration; crossing the threshold again does not extend it.

use std::time::Duration;

use crate::timer::{Scheduler, TimerEvent, TimerHandle};

/// Timing and threshold for the easter egg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterEggConfig {
    /// Clicks needed to celebrate
    pub threshold: u8,
    /// Idle gap after which the count resets
    pub idle_window: Duration,
    /// How long the overlay stays up
    pub celebration: Duration,
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self {
            threshold: 5,
            idle_window: Duration::from_secs(3),
            celebration: Duration::from_secs(5),
        }
    }
}

/// What a single click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Count advanced to the given value
    Counted(u8),
    /// Threshold reached, overlay shown
    Celebrate,
    /// Threshold reached while the overlay was already up
    AlreadyCelebrating,
}

/// Armed(count) / Celebrating state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickCounter {
    config: EasterEggConfig,
    count: u8,
    celebrating: bool,
    idle_timer: Option<TimerHandle>,
    celebration_timer: Option<TimerHandle>,
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::with_config(EasterEggConfig::default())
    }
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EasterEggConfig) -> Self {
        Self {
            config,
            count: 0,
            celebrating: false,
            idle_timer: None,
            celebration_timer: None,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn config(&self) -> &EasterEggConfig {
        &self.config
    }

    /// Register one click on the trigger element
    pub fn click(&mut self, scheduler: &mut impl Scheduler) -> ClickOutcome {
        if let Some(handle) = self.idle_timer.take() {
            scheduler.cancel(handle);
        }
        self.count += 1;

        if self.count < self.config.threshold {
            self.idle_timer = Some(scheduler.schedule(self.config.idle_window, TimerEvent::IdleReset));
            tracing::debug!(count = self.count, "title clicked");
            return ClickOutcome::Counted(self.count);
        }

        self.count = 0;
        if self.celebrating {
            tracing::debug!("threshold reached during celebration");
            return ClickOutcome::AlreadyCelebrating;
        }

        self.celebrating = true;
        self.celebration_timer =
            Some(scheduler.schedule(self.config.celebration, TimerEvent::CelebrationEnded));
        tracing::info!("easter egg found");
        ClickOutcome::Celebrate
    }

    /// Deliver a fired timer. Handles that are no longer current are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle, event: TimerEvent) {
        match event {
            TimerEvent::IdleReset if self.idle_timer == Some(handle) => {
                self.idle_timer = None;
                self.count = 0;
                tracing::debug!("click window expired");
            }
            TimerEvent::CelebrationEnded if self.celebration_timer == Some(handle) => {
                self.celebration_timer = None;
                self.celebrating = false;
                tracing::debug!("celebration over");
            }
            _ => tracing::trace!(?handle, ?event, "stale timer ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualClock;

    fn advance(counter: &mut ClickCounter, clock: &mut VirtualClock, by: Duration) {
        for (handle, event) in clock.advance(by) {
            counter.on_timer(handle, event);
        }
    }

    fn clicks(counter: &mut ClickCounter, clock: &mut VirtualClock, n: usize, gap: Duration) -> Vec<ClickOutcome> {
        (0..n)
            .map(|_| {
                let outcome = counter.click(clock);
                advance(counter, clock, gap);
                outcome
            })
            .collect()
    }

    #[test]
    fn test_five_quick_clicks_celebrate() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        let outcomes = clicks(&mut counter, &mut clock, 5, Duration::from_millis(500));
        assert_eq!(
            outcomes,
            vec![
                ClickOutcome::Counted(1),
                ClickOutcome::Counted(2),
                ClickOutcome::Counted(3),
                ClickOutcome::Counted(4),
                ClickOutcome::Celebrate,
            ]
        );
        assert!(counter.is_celebrating());
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_pause_resets_count() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        clicks(&mut counter, &mut clock, 4, Duration::from_millis(100));
        assert_eq!(counter.count(), 4);

        advance(&mut counter, &mut clock, Duration::from_secs(3));
        assert_eq!(counter.count(), 0);

        assert_eq!(counter.click(&mut clock), ClickOutcome::Counted(1));
        assert!(!counter.is_celebrating());
    }

    #[test]
    fn test_each_click_restarts_window() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        // 2.9s gaps: total span far beyond 3s, but no single gap reaches it
        let outcomes = clicks(&mut counter, &mut clock, 5, Duration::from_millis(2900));
        assert_eq!(outcomes.last(), Some(&ClickOutcome::Celebrate));
    }

    #[test]
    fn test_celebration_ends_after_five_seconds() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        clicks(&mut counter, &mut clock, 5, Duration::ZERO);
        assert!(counter.is_celebrating());

        advance(&mut counter, &mut clock, Duration::from_millis(4999));
        assert!(counter.is_celebrating());
        advance(&mut counter, &mut clock, Duration::from_millis(1));
        assert!(!counter.is_celebrating());
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_clicks_during_celebration_do_not_extend_it() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        clicks(&mut counter, &mut clock, 5, Duration::ZERO);
        advance(&mut counter, &mut clock, Duration::from_secs(1));

        let outcomes = clicks(&mut counter, &mut clock, 5, Duration::ZERO);
        assert_eq!(outcomes.last(), Some(&ClickOutcome::AlreadyCelebrating));

        advance(&mut counter, &mut clock, Duration::from_secs(4));
        assert!(!counter.is_celebrating());
    }

    #[test]
    fn test_counter_keeps_counting_during_celebration() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        clicks(&mut counter, &mut clock, 5, Duration::ZERO);
        clicks(&mut counter, &mut clock, 2, Duration::ZERO);
        assert_eq!(counter.count(), 2);
        assert!(counter.is_celebrating());
    }

    #[test]
    fn test_stale_timer_ignored() {
        let mut counter = ClickCounter::new();
        let mut clock = VirtualClock::new();

        counter.click(&mut clock);
        counter.click(&mut clock);
        // A handle the counter never issued, as if a cancelled timeout still fired
        counter.on_timer(TimerHandle(999), TimerEvent::IdleReset);
        assert_eq!(counter.count(), 2);
        counter.on_timer(TimerHandle(999), TimerEvent::CelebrationEnded);
        assert!(!counter.is_celebrating());
    }

    #[test]
    fn test_custom_config() {
        let config = EasterEggConfig {
            threshold: 2,
            idle_window: Duration::from_secs(1),
            celebration: Duration::from_secs(1),
        };
        let mut counter = ClickCounter::with_config(config);
        let mut clock = VirtualClock::new();

        assert_eq!(counter.click(&mut clock), ClickOutcome::Counted(1));
        assert_eq!(counter.click(&mut clock), ClickOutcome::Celebrate);
        advance(&mut counter, &mut clock, Duration::from_secs(1));
        assert!(!counter.is_celebrating());
    }
}
