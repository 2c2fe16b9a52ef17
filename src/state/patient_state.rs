// ============================================================================
// PATIENT STATE - Record viewer + in-memory medication/document edits
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{
    DocumentDraft, Medication, MedicationDraft, PatientDocument, PatientRecord, VitalKind,
};
use crate::services::TaskHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordTab {
    Overview,
    History,
    Medications,
    Documents,
}

impl RecordTab {
    pub const ALL: [RecordTab; 4] = [
        RecordTab::Overview,
        RecordTab::History,
        RecordTab::Medications,
        RecordTab::Documents,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecordTab::Overview => "Overview",
            RecordTab::History => "Medical History",
            RecordTab::Medications => "Medications",
            RecordTab::Documents => "Documents",
        }
    }
}

#[derive(Default)]
pub struct PatientTasks {
    pub load: Option<TaskHandle>,
    pub upload: Option<TaskHandle>,
}

#[derive(Clone)]
pub struct PatientState {
    pub patient_id: Rc<RefCell<Option<String>>>,
    pub loading: Rc<Cell<bool>>,
    pub record: Rc<RefCell<Option<PatientRecord>>>,
    pub active_tab: Rc<Cell<RecordTab>>,
    pub vital_kind: Rc<Cell<VitalKind>>,
    pub medications: Rc<RefCell<Vec<Medication>>>,
    pub medication_draft: Rc<RefCell<MedicationDraft>>,
    pub medication_dialog_open: Rc<Cell<bool>>,
    pub documents: Rc<RefCell<Vec<PatientDocument>>>,
    pub document_draft: Rc<RefCell<DocumentDraft>>,
    pub uploading: Rc<Cell<bool>>,
    pub viewing: Rc<RefCell<Option<PatientDocument>>>,
    pub tasks: Rc<RefCell<PatientTasks>>,
}

impl PatientState {
    pub fn new() -> Self {
        Self {
            patient_id: Rc::new(RefCell::new(None)),
            loading: Rc::new(Cell::new(false)),
            record: Rc::new(RefCell::new(None)),
            active_tab: Rc::new(Cell::new(RecordTab::Overview)),
            vital_kind: Rc::new(Cell::new(VitalKind::default())),
            medications: Rc::new(RefCell::new(Vec::new())),
            medication_draft: Rc::new(RefCell::new(MedicationDraft::default())),
            medication_dialog_open: Rc::new(Cell::new(false)),
            documents: Rc::new(RefCell::new(Vec::new())),
            document_draft: Rc::new(RefCell::new(DocumentDraft::default())),
            uploading: Rc::new(Cell::new(false)),
            viewing: Rc::new(RefCell::new(None)),
            tasks: Rc::new(RefCell::new(PatientTasks::default())),
        }
    }

    pub fn record(&self) -> Option<PatientRecord> {
        self.record.borrow().clone()
    }

    /// Forget the loaded record and everything added to it
    pub fn reset(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        drop(tasks);
        *self.patient_id.borrow_mut() = None;
        self.loading.set(false);
        *self.record.borrow_mut() = None;
        self.active_tab.set(RecordTab::Overview);
        self.vital_kind.set(VitalKind::default());
        self.medications.borrow_mut().clear();
        *self.medication_draft.borrow_mut() = MedicationDraft::default();
        self.medication_dialog_open.set(false);
        self.documents.borrow_mut().clear();
        *self.document_draft.borrow_mut() = DocumentDraft::default();
        self.uploading.set(false);
        *self.viewing.borrow_mut() = None;
    }
}

impl Default for PatientState {
    fn default() -> Self {
        Self::new()
    }
}
