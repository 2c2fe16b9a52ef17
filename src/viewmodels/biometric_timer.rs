// ============================================================================
// BIOMETRIC TIMER - Simulated fingerprint scan
// ============================================================================
// Progress climbs by `biometric_step` on every tick until it reaches 100,
// then after `biometric_settle_ms` the completion callback fires. Completion
// runs at most once and never after the timer is dropped.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::AuthConfig;
use crate::services::{Scheduler, TaskHandle};

type Slot<T> = Rc<RefCell<Option<T>>>;

pub struct BiometricTimer {
    interval: Slot<TaskHandle>,
    settle: Slot<TaskHandle>,
    finished: Rc<Cell<bool>>,
}

impl BiometricTimer {
    pub fn start<P, C>(
        scheduler: Rc<dyn Scheduler>,
        config: &AuthConfig,
        on_progress: P,
        on_complete: C,
    ) -> Self
    where
        P: Fn(u8) + 'static,
        C: FnOnce() + 'static,
    {
        let interval: Slot<TaskHandle> = Rc::new(RefCell::new(None));
        let settle: Slot<TaskHandle> = Rc::new(RefCell::new(None));
        let progress = Rc::new(Cell::new(0u8));
        let finished = Rc::new(Cell::new(false));
        let on_complete: Slot<Box<dyn FnOnce()>> = Rc::new(RefCell::new(Some(Box::new(on_complete))));

        let step = config.biometric_step.clamp(1, 100);
        let settle_ms = config.biometric_settle_ms;

        let tick = {
            let (interval, settle, progress, finished) =
                (interval.clone(), settle.clone(), progress.clone(), finished.clone());
            let scheduler = scheduler.clone();

            move || {
                // At 100 the interval idles until the settle timeout stops it
                if progress.get() >= 100 || finished.get() {
                    return;
                }

                let next = progress.get().saturating_add(step).min(100);
                progress.set(next);
                on_progress(next);

                if next < 100 {
                    return;
                }

                log::debug!("🖐️ [BIOMETRIC] Scan complete, settling for {} ms", settle_ms);
                let (interval, finished, on_complete) =
                    (interval.clone(), finished.clone(), on_complete.clone());
                let handle = scheduler.after(
                    settle_ms,
                    Box::new(move || {
                        let stopped = interval.borrow_mut().take();
                        drop(stopped);

                        if finished.replace(true) {
                            return;
                        }
                        let callback = on_complete.borrow_mut().take();
                        if let Some(callback) = callback {
                            callback();
                        }
                    }),
                );
                *settle.borrow_mut() = Some(handle);
            }
        };

        let handle = scheduler.every(config.tick_interval_ms(), Box::new(tick));
        *interval.borrow_mut() = Some(handle);

        Self {
            interval,
            settle,
            finished,
        }
    }

    /// Stop both timers without completing
    fn cancel(&self) {
        self.finished.set(true);
        let interval = self.interval.borrow_mut().take();
        let settle = self.settle.borrow_mut().take();
        drop(interval);
        drop(settle);
    }
}

impl Drop for BiometricTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;

    fn counting_timer(clock: &ManualScheduler) -> (BiometricTimer, Rc<RefCell<Vec<u8>>>, Rc<Cell<u32>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));
        let (s, c) = (seen.clone(), completions.clone());
        let timer = BiometricTimer::start(
            Rc::new(clock.clone()),
            &AuthConfig::default(),
            move |p| s.borrow_mut().push(p),
            move || c.set(c.get() + 1),
        );
        (timer, seen, completions)
    }

    #[test]
    fn test_reaches_100_then_completes_after_settle() {
        let clock = ManualScheduler::new();
        let (_timer, seen, completions) = counting_timer(&clock);

        clock.advance(2999);
        assert_eq!(seen.borrow().last(), Some(&98));
        assert_eq!(completions.get(), 0);

        clock.advance(1);
        assert_eq!(seen.borrow().last(), Some(&100));
        assert_eq!(completions.get(), 0);

        clock.advance(499);
        assert_eq!(completions.get(), 0);
        clock.advance(1);
        assert_eq!(completions.get(), 1);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 50);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*seen.last().unwrap(), 100);
    }

    #[test]
    fn test_completes_exactly_once() {
        let clock = ManualScheduler::new();
        let (_timer, _, completions) = counting_timer(&clock);

        clock.advance(10_000);
        assert_eq!(completions.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_drop_before_completion_never_fires() {
        let clock = ManualScheduler::new();
        let (timer, seen, completions) = counting_timer(&clock);

        clock.advance(1200);
        drop(timer);
        let ticks = seen.borrow().len();

        clock.advance(10_000);
        assert_eq!(completions.get(), 0);
        assert_eq!(seen.borrow().len(), ticks);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel_during_settle() {
        let clock = ManualScheduler::new();
        let (timer, seen, completions) = counting_timer(&clock);

        clock.advance(3200);
        assert_eq!(seen.borrow().last(), Some(&100));
        timer.cancel();

        clock.advance(1000);
        assert_eq!(completions.get(), 0);
    }
}
