//! Task Id Sources
//!
//! Ids come from wall-clock milliseconds, clamped so they never repeat
//! or go backwards within a session.

use crate::task::TaskId;

/// Produces fresh task ids
pub trait IdSource {
    fn next_id(&mut self) -> TaskId;

    /// Make sure ids issued from now on are greater than `id`
    fn observe(&mut self, id: TaskId);
}

/// Millisecond timestamp ids with a monotonic guard
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: TaskId,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_millis() -> TaskId {
        // Before-epoch clocks are clamped to zero; the monotonic guard takes over.
        chrono::Utc::now().timestamp_millis().max(0) as TaskId
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> TaskId {
        let now = Self::now_millis();
        // An id of u64::MAX leaves nothing above it; restart from the clock.
        let id = match self.last.checked_add(1) {
            Some(floor) => now.max(floor),
            None => now,
        };
        self.last = id;
        id
    }

    fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }
}

/// Deterministic counter, for tests and previews
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: TaskId,
}

impl SequentialIds {
    pub fn starting_at(next: TaskId) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    fn observe(&mut self, id: TaskId) {
        self.next = self.next.max(id.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_ids_strictly_increase() {
        let mut ids = ClockIds::new();
        let issued: Vec<TaskId> = (0..50).map(|_| ids.next_id()).collect();
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_clock_ids_are_time_based() {
        let before = chrono::Utc::now().timestamp_millis() as TaskId;
        let id = ClockIds::new().next_id();
        assert!(id >= before);
    }

    #[test]
    fn test_clock_ids_skip_past_observed() {
        let mut ids = ClockIds::new();
        let far_future = ClockIds::now_millis() + 1_000_000;
        ids.observe(far_future);
        assert_eq!(ids.next_id(), far_future + 1);
    }

    #[test]
    fn test_clock_ids_after_max_observed() {
        let mut ids = ClockIds::new();
        ids.observe(TaskId::MAX);
        let id = ids.next_id();
        assert!(id < TaskId::MAX);
        assert!(ids.next_id() > id);
    }

    #[test]
    fn test_sequential_ids_saturate() {
        let mut ids = SequentialIds::default();
        ids.observe(TaskId::MAX);
        assert_eq!(ids.next_id(), TaskId::MAX);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        ids.observe(10);
        assert_eq!(ids.next_id(), 11);
        ids.observe(3);
        assert_eq!(ids.next_id(), 12);
    }
}
