// ============================================================================
// TEST DOUBLES - Virtual clock, scripted geolocation, in-memory history
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::config::AppConfig;
use crate::error::LocationError;
use crate::models::GeoPosition;
use crate::services::geolocation::LocationCallback;
use crate::services::{HistoryPort, LocationProvider, MemoryStore, Scheduler, Services, TaskHandle};
use crate::state::AppState;

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>, u64),
}

#[derive(Default)]
struct Timeline {
    now: u64,
    next_id: u64,
    /// (due, id) -> job
    queue: BTreeMap<(u64, u64), Job>,
    alive: HashSet<u64>,
}

/// Scheduler driven by `advance`, with no real time involved
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.timeline.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.timeline.borrow().alive.len()
    }

    /// Move the clock forward, running every job that comes due in order
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut timeline = self.timeline.borrow_mut();
                let key = match timeline.queue.keys().next() {
                    Some(&key) if key.0 <= target => key,
                    _ => break,
                };
                let job = timeline.queue.remove(&key);
                timeline.now = key.0;
                job.map(|job| (key, job))
            };

            let Some(((due, id), job)) = next else { continue };
            match job {
                Job::Once(task) => {
                    self.timeline.borrow_mut().alive.remove(&id);
                    task();
                }
                Job::Repeat(mut tick, period) => {
                    tick();
                    let mut timeline = self.timeline.borrow_mut();
                    if timeline.alive.contains(&id) {
                        timeline.queue.insert((due + period, id), Job::Repeat(tick, period));
                    }
                }
            }
        }
        self.timeline.borrow_mut().now = target;
    }

    fn schedule(&self, delay: u64, job: Job) -> TaskHandle {
        let id = {
            let mut timeline = self.timeline.borrow_mut();
            let id = timeline.next_id;
            timeline.next_id += 1;
            let due = timeline.now + delay;
            timeline.queue.insert((due, id), job);
            timeline.alive.insert(id);
            id
        };

        let timeline = self.timeline.clone();
        TaskHandle::new(move || {
            let mut timeline = timeline.borrow_mut();
            timeline.alive.remove(&id);
            timeline.queue.retain(|&(_, job_id), _| job_id != id);
        })
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TaskHandle {
        let period = u64::from(period_ms.max(1));
        self.schedule(period, Job::Repeat(tick, period))
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.schedule(u64::from(delay_ms), Job::Once(task))
    }
}

/// Geolocation whose answer is released by the test
#[derive(Clone, Default)]
pub struct ScriptedLocation {
    pending: Rc<RefCell<Vec<LocationCallback>>>,
    requests: Rc<Cell<usize>>,
}

impl ScriptedLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    /// Answer the oldest outstanding request
    pub fn resolve(&self, outcome: Result<GeoPosition, LocationError>) {
        let callback = {
            let mut pending = self.pending.borrow_mut();
            assert!(!pending.is_empty(), "no outstanding location request");
            pending.remove(0)
        };
        callback(outcome);
    }
}

impl LocationProvider for ScriptedLocation {
    fn current_position(&self, on_result: LocationCallback) {
        self.requests.set(self.requests.get() + 1);
        self.pending.borrow_mut().push(on_result);
    }
}

#[derive(Clone, Default)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Vec<String>>>,
}

impl MemoryHistory {
    pub fn starting_at(path: &str) -> Self {
        Self {
            entries: Rc::new(RefCell::new(vec![path.to_string()])),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl HistoryPort for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_string());
    }

    fn replace(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        entries.pop();
        entries.push(path.to_string());
    }
}

/// Everything a test needs to poke at
pub struct Harness {
    pub state: AppState,
    pub clock: ManualScheduler,
    pub location: ScriptedLocation,
    pub store: Rc<MemoryStore>,
    pub history: MemoryHistory,
    pub renders: Rc<Cell<usize>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(Rc::new(MemoryStore::new()))
    }

    /// Start the app on top of an existing store (simulates a reload)
    pub fn with_store(store: Rc<MemoryStore>) -> Self {
        let clock = ManualScheduler::new();
        let location = ScriptedLocation::new();
        let history = MemoryHistory::starting_at("/");
        let services = Services {
            store: store.clone(),
            scheduler: Rc::new(clock.clone()),
            location: Rc::new(location.clone()),
            history: Rc::new(history.clone()),
        };

        let state = AppState::new(AppConfig::default(), services);
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            state.subscribe_to_changes(move || renders.set(renders.get() + 1));
        }

        Self {
            state,
            clock,
            location,
            store,
            history,
            renders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_runs_in_order_and_cancels() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        let _a = clock.after(30, Box::new(move || l.borrow_mut().push("a")));
        let l = log.clone();
        let b = clock.after(10, Box::new(move || l.borrow_mut().push("b")));
        let l = log.clone();
        let ticks = clock.every(15, Box::new(move || l.borrow_mut().push("tick")));

        clock.advance(20);
        assert_eq!(*log.borrow(), vec!["b", "tick"]);
        drop(b);

        drop(ticks);
        clock.advance(100);
        assert_eq!(*log.borrow(), vec!["b", "tick", "a"]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), 120);
    }

    #[test]
    fn test_repeat_cancelled_from_inside_stops() {
        let clock = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));

        let (c, s) = (count.clone(), slot.clone());
        let handle = clock.every(10, Box::new(move || {
            c.set(c.get() + 1);
            if c.get() == 3 {
                s.borrow_mut().take();
            }
        }));
        *slot.borrow_mut() = Some(handle);

        clock.advance(100);
        assert_eq!(count.get(), 3);
    }
}
