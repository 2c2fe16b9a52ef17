// ============================================================================
// DASHBOARD STATE
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{Appointment, PatientSummary};
use crate::services::TaskHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Dashboard,
    Appointments,
    Patients,
    Reports,
    Documents,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 6] = [
        DashboardTab::Dashboard,
        DashboardTab::Appointments,
        DashboardTab::Patients,
        DashboardTab::Reports,
        DashboardTab::Documents,
        DashboardTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "Dashboard",
            DashboardTab::Appointments => "Appointments",
            DashboardTab::Patients => "Patients",
            DashboardTab::Reports => "Reports",
            DashboardTab::Documents => "Documents",
            DashboardTab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "🏠",
            DashboardTab::Appointments => "📅",
            DashboardTab::Patients => "👥",
            DashboardTab::Reports => "📊",
            DashboardTab::Documents => "📁",
            DashboardTab::Settings => "⚙️",
        }
    }
}

/// Timers owned by the dashboard view
#[derive(Default)]
pub struct DashboardTasks {
    pub splash: Option<TaskHandle>,
    pub clock: Option<TaskHandle>,
    pub reauth: Option<TaskHandle>,
    pub open_record: Option<TaskHandle>,
}

#[derive(Clone)]
pub struct DashboardState {
    pub loading: Rc<Cell<bool>>,
    pub clock: Rc<RefCell<String>>,
    pub active_tab: Rc<Cell<DashboardTab>>,
    pub appointments: Rc<RefCell<Vec<Appointment>>>,
    pub selected_id: Rc<RefCell<Option<String>>>,
    /// "Authenticating Access" overlay
    pub authenticating: Rc<Cell<bool>>,
    pub current_patient: Rc<RefCell<Option<PatientSummary>>>,
    pub opening_record: Rc<Cell<bool>>,
    pub tasks: Rc<RefCell<DashboardTasks>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: Rc::new(Cell::new(true)),
            clock: Rc::new(RefCell::new(String::new())),
            active_tab: Rc::new(Cell::new(DashboardTab::Dashboard)),
            appointments: Rc::new(RefCell::new(Vec::new())),
            selected_id: Rc::new(RefCell::new(None)),
            authenticating: Rc::new(Cell::new(false)),
            current_patient: Rc::new(RefCell::new(None)),
            opening_record: Rc::new(Cell::new(false)),
            tasks: Rc::new(RefCell::new(DashboardTasks::default())),
        }
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected_id.borrow().clone()
    }

    pub fn current_patient(&self) -> Option<PatientSummary> {
        self.current_patient.borrow().clone()
    }

    /// Drop every timer and forget the selection
    pub fn reset(&self) {
        // Taken out first so handle drops never run under the borrow
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        drop(tasks);
        self.loading.set(true);
        self.authenticating.set(false);
        self.opening_record.set(false);
        *self.selected_id.borrow_mut() = None;
        *self.current_patient.borrow_mut() = None;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
