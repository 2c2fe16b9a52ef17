// ============================================================================
// PATIENT VIEWMODEL - Record loading, medications, documents
// ============================================================================
// Additions live in memory only; leaving the page discards them.
// ============================================================================

use crate::error::FormError;
use crate::models::{MedicationDraft, MedicationField, Route, SelectedFile, VitalKind};
use crate::services::records_service;
use crate::state::{AppState, RecordTab};
use crate::utils::today_iso;
use crate::viewmodels::RouterViewModel;

pub struct PatientViewModel {
    state: AppState,
}

impl PatientViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Show the loading state, then the generated record for `id`
    pub fn open(&self, id: &str) {
        let patient = &self.state.patient;
        patient.reset();
        *patient.patient_id.borrow_mut() = Some(id.to_string());
        *patient.medication_draft.borrow_mut() = MedicationDraft::new(&today_iso());
        patient.loading.set(true);

        let state = self.state.clone();
        let id = id.to_string();
        let handle = self.state.services.scheduler.after(
            self.state.config.ui.record_load_ms,
            Box::new(move || {
                let patient = &state.patient;
                match records_service::patient_record(&id) {
                    Some(record) => {
                        *patient.medications.borrow_mut() = record.medications.clone();
                        *patient.documents.borrow_mut() = record.documents.clone();
                        *patient.record.borrow_mut() = Some(record);
                        log::info!("📋 [PATIENT] Record {} loaded", id);
                    }
                    None => log::warn!("⚠️ [PATIENT] No record for {:?}", id),
                }
                patient.loading.set(false);
                state.notify_changes();
            }),
        );

        let previous = patient.tasks.borrow_mut().load.replace(handle);
        drop(previous);
    }

    pub fn unmount(&self) {
        self.state.patient.reset();
    }

    pub fn set_tab(&self, tab: RecordTab) {
        self.state.patient.active_tab.set(tab);
        self.state.notify_changes();
    }

    pub fn set_vital_kind(&self, kind: VitalKind) {
        self.state.patient.vital_kind.set(kind);
        self.state.notify_changes();
    }

    pub fn back_to_dashboard(&self) {
        RouterViewModel::new(&self.state).navigate(Route::Dashboard);
    }

    // ------------------------------------------------------------------------
    // Medications
    // ------------------------------------------------------------------------

    pub fn set_medication_dialog(&self, open: bool) {
        self.state.patient.medication_dialog_open.set(open);
        self.state.notify_changes();
    }

    pub fn set_medication_field(&self, field: MedicationField, value: &str) {
        self.state.patient.medication_draft.borrow_mut().set(field, value);
    }

    pub fn add_medication(&self) -> Result<(), FormError> {
        let patient = &self.state.patient;
        if patient.record.borrow().is_none() {
            return Err(FormError::NoRecord);
        }

        let validated = patient.medication_draft.borrow().validate();
        let medication = match validated {
            Ok(medication) => medication,
            Err(e) => {
                self.state.toasts.error(&e.to_string());
                return Err(e);
            }
        };

        log::info!("💊 [PATIENT] Medication added: {}", medication.name);
        patient.medications.borrow_mut().push(medication);
        *patient.medication_draft.borrow_mut() = MedicationDraft::new(&today_iso());
        patient.medication_dialog_open.set(false);
        self.state.toasts.success("Medication added successfully");
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------------

    pub fn select_file(&self, file: SelectedFile) {
        self.state.patient.document_draft.borrow_mut().select_file(file);
        self.state.notify_changes();
    }

    pub fn set_document_name(&self, name: &str) {
        self.state.patient.document_draft.borrow_mut().set_name(name);
    }

    /// Capture the draft now, append it after the simulated upload delay
    pub fn upload_document(&self) -> Result<(), FormError> {
        let patient = &self.state.patient;
        if patient.uploading.get() {
            return Err(FormError::UploadInProgress);
        }
        if patient.record.borrow().is_none() {
            return Err(FormError::NoRecord);
        }

        let committed = patient.document_draft.borrow().commit(0, &today_iso());
        let mut document = match committed {
            Ok(document) => document,
            Err(e) => {
                self.state.toasts.error(&e.to_string());
                return Err(e);
            }
        };

        patient.uploading.set(true);
        self.state.notify_changes();

        let state = self.state.clone();
        let handle = self.state.services.scheduler.after(
            self.state.config.ui.document_upload_ms,
            Box::new(move || {
                let patient = &state.patient;
                patient.uploading.set(false);

                document.assign_id(patient.documents.borrow().len());
                log::info!("📎 [PATIENT] Uploaded {} as {}", document.name, document.id);
                patient.documents.borrow_mut().push(document);
                *patient.document_draft.borrow_mut() = Default::default();
                state.toasts.success("Document uploaded successfully");
            }),
        );

        let previous = patient.tasks.borrow_mut().upload.replace(handle);
        drop(previous);
        Ok(())
    }

    pub fn view_document(&self, id: &str) {
        let patient = &self.state.patient;
        let found = patient.documents.borrow().iter().find(|d| d.id == id).cloned();
        *patient.viewing.borrow_mut() = found;
        self.state.notify_changes();
    }

    pub fn close_viewer(&self) {
        *self.state.patient.viewing.borrow_mut() = None;
        self.state.notify_changes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_FLAG_KEY;
    use crate::models::DocumentKind;
    use crate::services::{KeyValueStore, MemoryStore};
    use crate::state::ToastKind;
    use crate::testing::Harness;
    use std::rc::Rc;

    fn on_record(id: &str) -> Harness {
        let store = Rc::new(MemoryStore::new());
        store.set_item(SESSION_FLAG_KEY, "true").unwrap();
        let h = Harness::with_store(store);
        let router = RouterViewModel::new(&h.state);
        router.start();
        router.navigate(Route::Patient(id.to_string()));
        h
    }

    fn loaded(id: &str) -> Harness {
        let h = on_record(id);
        h.clock.advance(1500);
        h
    }

    fn last_toast(h: &Harness) -> (ToastKind, String) {
        let toast = h.state.toasts.visible().pop().expect("a toast");
        (toast.kind, toast.message)
    }

    #[test]
    fn test_record_loads_after_delay() {
        let h = on_record("2");
        assert!(h.state.patient.loading.get());
        assert!(h.state.patient.record().is_none());

        h.clock.advance(1500);
        let record = h.state.patient.record().expect("record loaded");
        assert_eq!(record.aadhaar_masked, "XXXX-XXXX-0002");
        assert!(!h.state.patient.loading.get());
        assert_eq!(h.state.patient.medications.borrow().len(), 2);
        assert_eq!(h.state.patient.documents.borrow().len(), 3);
    }

    #[test]
    fn test_blank_id_is_not_found() {
        let h = loaded(" ");
        assert!(h.state.patient.record().is_none());
        assert!(!h.state.patient.loading.get());
    }

    #[test]
    fn test_medication_requires_fields() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.set_medication_dialog(true);
        vm.set_medication_field(MedicationField::Name, "Metformin");
        vm.set_medication_field(MedicationField::Dosage, "500mg");

        assert_eq!(vm.add_medication(), Err(FormError::MissingMedicationFields));
        assert_eq!(
            last_toast(&h),
            (ToastKind::Error, "Please fill all required fields".to_string())
        );
        assert_eq!(h.state.patient.medications.borrow().len(), 2);
        assert!(h.state.patient.medication_dialog_open.get());
    }

    #[test]
    fn test_medication_added_and_form_reset() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.set_medication_dialog(true);
        vm.set_medication_field(MedicationField::Name, "Metformin");
        vm.set_medication_field(MedicationField::Dosage, "500mg");
        vm.set_medication_field(MedicationField::Frequency, "Twice daily");
        vm.set_medication_field(MedicationField::Doctor, "Dr. Rao");

        vm.add_medication().unwrap();

        let meds = h.state.patient.medications.borrow();
        assert_eq!(meds.len(), 3);
        assert_eq!(meds[2].name, "Metformin");
        assert_eq!(meds[2].prescribed, today_iso());
        assert!(!h.state.patient.medication_dialog_open.get());
        assert!(h.state.patient.medication_draft.borrow().name.is_empty());
        assert_eq!(
            last_toast(&h),
            (ToastKind::Success, "Medication added successfully".to_string())
        );
    }

    fn pdf() -> SelectedFile {
        SelectedFile {
            file_name: "lab.report.pdf".into(),
            mime: "application/pdf".into(),
            size_bytes: 2048,
        }
    }

    #[test]
    fn test_upload_without_file_is_rejected() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.set_document_name("Scan");

        assert_eq!(vm.upload_document(), Err(FormError::MissingDocument));
        assert_eq!(
            last_toast(&h),
            (ToastKind::Error, "Please select a file and provide a name".to_string())
        );
        assert!(!h.state.patient.uploading.get());
    }

    #[test]
    fn test_upload_appends_after_delay() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.select_file(SelectedFile {
            file_name: "xray.png".into(),
            mime: "image/png".into(),
            size_bytes: 1_048_576,
        });
        assert_eq!(h.state.patient.document_draft.borrow().name, "xray");

        vm.upload_document().unwrap();
        assert!(h.state.patient.uploading.get());
        assert_eq!(vm.upload_document(), Err(FormError::UploadInProgress));

        h.clock.advance(1500);
        let docs = h.state.patient.documents.borrow();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[3].id, "doc4");
        assert_eq!(docs[3].kind, DocumentKind::Image);
        assert_eq!(docs[3].date, today_iso());
        assert!(!h.state.patient.uploading.get());
        assert!(h.state.patient.document_draft.borrow().file.is_none());
        assert_eq!(
            last_toast(&h),
            (ToastKind::Success, "Document uploaded successfully".to_string())
        );
    }

    #[test]
    fn test_upload_keeps_what_was_submitted() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.select_file(SelectedFile {
            file_name: "scan.png".into(),
            mime: "image/png".into(),
            size_bytes: 4096,
        });
        vm.upload_document().unwrap();

        vm.set_document_name("");
        vm.select_file(pdf());
        h.clock.advance(1500);

        let docs = h.state.patient.documents.borrow();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[3].id, "doc4");
        assert_eq!(docs[3].name, "scan");
        assert_eq!(docs[3].kind, DocumentKind::Image);
        assert_eq!(docs[3].size_bytes, Some(4096));
        assert_eq!(
            last_toast(&h),
            (ToastKind::Success, "Document uploaded successfully".to_string())
        );
    }

    #[test]
    fn test_typed_name_is_kept_when_file_chosen() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.set_document_name("Lipid panel");
        vm.select_file(pdf());
        assert_eq!(h.state.patient.document_draft.borrow().name, "Lipid panel");
    }

    #[test]
    fn test_leaving_discards_upload_and_additions() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.select_file(pdf());
        vm.upload_document().unwrap();
        vm.back_to_dashboard();

        h.clock.advance(5000);
        assert!(h.state.patient.documents.borrow().is_empty());
        assert_eq!(h.state.router.current(), Route::Dashboard);
    }

    #[test]
    fn test_viewer_opens_and_closes() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.view_document("doc2");
        assert_eq!(
            h.state.patient.viewing.borrow().as_ref().map(|d| d.name.clone()),
            Some("Chest X-Ray".to_string())
        );
        vm.close_viewer();
        assert!(h.state.patient.viewing.borrow().is_none());
    }

    #[test]
    fn test_tabs() {
        let h = loaded("1");
        let vm = PatientViewModel::new(&h.state);
        vm.set_tab(RecordTab::Documents);
        vm.set_vital_kind(VitalKind::Oxygen);
        assert_eq!(h.state.patient.active_tab.get(), RecordTab::Documents);
        assert_eq!(h.state.patient.vital_kind.get(), VitalKind::Oxygen);
    }
}
