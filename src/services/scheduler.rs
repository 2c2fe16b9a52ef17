// ============================================================================
// SCHEDULER - Cancelable timeouts and intervals
// ============================================================================
// Every scheduled task is owned by a TaskHandle; dropping the handle clears
// the underlying timer so nothing fires after the owning view is gone.
// ============================================================================

use gloo_timers::callback::{Interval, Timeout};

/// Owner of a scheduled task. Dropping it cancels the task.
#[must_use = "dropping a TaskHandle cancels the task immediately"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    /// Run `tick` every `period_ms` until the handle is dropped
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TaskHandle;

    /// Run `task` once after `delay_ms` unless the handle is dropped first
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// `setInterval` / `setTimeout` through gloo-timers
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TaskHandle {
        let interval = Interval::new(period_ms, tick);
        TaskHandle::new(move || drop(interval))
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout))
    }
}
