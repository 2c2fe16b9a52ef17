// ============================================================================
// TOAST STATE - Transient notifications
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::services::{Scheduler, TaskHandle};
use crate::state::{ChangeNotifier, ReactiveState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone)]
pub struct ToastState {
    items: ReactiveState<Vec<Toast>>,
    timers: Rc<RefCell<Vec<(u64, TaskHandle)>>>,
    next_id: Rc<Cell<u64>>,
    scheduler: Rc<dyn Scheduler>,
    duration_ms: u32,
}

impl ToastState {
    pub fn new(scheduler: Rc<dyn Scheduler>, duration_ms: u32, notifier: ChangeNotifier) -> Self {
        Self {
            items: ReactiveState::new(Vec::new(), notifier),
            timers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(1)),
            scheduler,
            duration_ms,
        }
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        // Handles of toasts that are already gone have fired; drop them here
        let visible: Vec<u64> = self.items.with(|items| items.iter().map(|t| t.id).collect());
        self.timers.borrow_mut().retain(|(tid, _)| visible.contains(tid));

        let items = self.items.clone();
        let handle = self.scheduler.after(
            self.duration_ms,
            Box::new(move || items.update(|items| items.retain(|t| t.id != id))),
        );
        self.timers.borrow_mut().push((id, handle));

        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });
    }

    pub fn dismiss(&self, id: u64) {
        let handle = {
            let mut timers = self.timers.borrow_mut();
            timers.iter().position(|(tid, _)| *tid == id).map(|i| timers.remove(i))
        };
        drop(handle);
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}
