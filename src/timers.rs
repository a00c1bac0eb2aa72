//! Browser Timer Scheduler
//!
//! `Scheduler` on top of `gloo_timers` timeouts. Dropping a `Timeout`
//! clears it, so cancelling is just removing it from the pending map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use todo_core::{Scheduler, TimerEvent, TimerHandle};

type PendingTimeouts = Rc<RefCell<HashMap<TimerHandle, Timeout>>>;

/// Real-time scheduler; fired events go to `on_fire`
pub struct BrowserScheduler {
    next_handle: u64,
    pending: PendingTimeouts,
    on_fire: Rc<dyn Fn(TimerHandle, TimerEvent)>,
}

impl BrowserScheduler {
    pub fn new(on_fire: impl Fn(TimerHandle, TimerEvent) + 'static) -> Self {
        Self {
            next_handle: 0,
            pending: Rc::new(RefCell::new(HashMap::new())),
            on_fire: Rc::new(on_fire),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);

        let pending = Rc::clone(&self.pending);
        let on_fire = Rc::clone(&self.on_fire);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            // Must not drop the Timeout whose closure is running; leak it instead.
            // One small closure per fired timer: an idle reset or a celebration end.
            if let Some(fired) = pending.borrow_mut().remove(&handle) {
                let _ = fired.forget();
            }
            on_fire(handle, event);
        });

        self.pending.borrow_mut().insert(handle, timeout);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.borrow_mut().remove(&handle);
    }
}
