// ============================================================================
// PATIENT VIEW - Full record: vitals, history, medications, documents
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, on_file_change, on_input, on_submit, text_el, ElementBuilder};
use crate::models::{MedicationField, PatientDocument, PatientRecord, VitalKind, Vitals};
use crate::state::{AppState, RecordTab};
use crate::viewmodels::PatientViewModel;
use crate::views::shared::{render_fingerprint, render_header};

pub fn render_patient(state: &AppState) -> Result<Element, JsValue> {
    let back = text_el("button", "btn-secondary", "← Back to Dashboard")?;
    {
        let state = state.clone();
        on_click(&back, move |_| PatientViewModel::new(&state).back_to_dashboard())?;
    }

    let patient = &state.patient;
    if patient.loading.get() {
        return Ok(ElementBuilder::new("div")?
            .class("splash")
            .child(render_fingerprint("Loading Patient Records", None)?)?
            .build());
    }

    let Some(record) = patient.record() else {
        return Ok(ElementBuilder::new("div")?
            .class("not-found")
            .child(text_el("h1", "", "Patient Not Found")?)?
            .child(text_el("p", "", "No record exists for this patient.")?)?
            .child(back)?
            .build());
    };

    let body = match patient.active_tab.get() {
        RecordTab::Overview => render_overview(state, &record)?,
        RecordTab::History => render_history(&record)?,
        RecordTab::Medications => render_medications(state)?,
        RecordTab::Documents => render_documents(state)?,
    };

    let mut page = ElementBuilder::new("div")?
        .class("page patient")
        .child(render_header("Patient Record", vec![back])?)?
        .child(render_profile(&record)?)?
        .child(render_tabs(state)?)?
        .child(body)?;

    if let Some(document) = patient.viewing.borrow().clone() {
        page = page.child(render_viewer(state, &document)?)?;
    }

    Ok(page.build())
}

fn fact(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("fact")
        .child(text_el("span", "fact-label", label)?)?
        .child(text_el("span", "fact-value", value)?)?
        .build())
}

fn render_profile(record: &PatientRecord) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("card profile")
        .child(text_el("h2", "", &record.name)?)?
        .child(text_el("span", "badge", record.diabetic_label())?)?
        .child(fact("Aadhaar", &record.aadhaar_masked)?)?
        .child(fact("Age", &record.age.to_string())?)?
        .child(fact("Gender", &record.gender)?)?
        .child(fact("Blood Type", &record.blood_type)?)?
        .child(fact("Height", &record.height)?)?
        .child(fact("Weight", &record.weight)?)?
        .child(fact("BMI", &format!("{:.1}", record.bmi))?)?
        .child(fact("Last Visit", &record.last_visit)?)?
        .build())
}

fn render_tabs(state: &AppState) -> Result<Element, JsValue> {
    let active = state.patient.active_tab.get();
    let tabs = ElementBuilder::new("div")?.class("tabs").attr("role", "tablist")?.build();

    for tab in RecordTab::ALL {
        let button = ElementBuilder::new("button")?
            .class("tab")
            .class_if("active", tab == active)?
            .attr("role", "tab")?
            .text(tab.label())
            .build();
        let state = state.clone();
        on_click(&button, move |_| PatientViewModel::new(&state).set_tab(tab))?;
        tabs.append_child(&button)?;
    }

    Ok(tabs)
}

// ----------------------------------------------------------------------------
// Overview
// ----------------------------------------------------------------------------

/// Bar height in percent of the axis range
fn bar_height(value: f64, (min, max): (f64, f64)) -> f64 {
    if max <= min {
        return 100.0;
    }
    ((value - min) / (max - min) * 80.0 + 20.0).clamp(0.0, 100.0)
}

fn bar(class: &str, height: f64, title: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(class)
        .attr("style", &format!("height: {:.0}%", height))?
        .attr("title", title)?
        .build())
}

fn render_chart(vitals: &Vitals, kind: VitalKind) -> Result<Element, JsValue> {
    let chart = ElementBuilder::new("div")?
        .class("chart")
        .attr("aria-label", kind.series_name())?
        .build();
    let domain = vitals.axis_domain(kind).unwrap_or((0.0, 1.0));

    let mut columns: Vec<(String, Vec<Element>)> = Vec::new();
    if kind == VitalKind::BloodPressure {
        for sample in &vitals.blood_pressure {
            let systolic = f64::from(sample.systolic);
            let diastolic = f64::from(sample.diastolic);
            columns.push((
                sample.label.clone(),
                vec![
                    bar("bar bar-systolic", bar_height(systolic, domain), &sample.systolic.to_string())?,
                    bar("bar bar-diastolic", bar_height(diastolic, domain), &sample.diastolic.to_string())?,
                ],
            ));
        }
    } else {
        let series = match kind {
            VitalKind::Weight => &vitals.weight,
            VitalKind::Sugar => &vitals.sugar,
            _ => &vitals.oxygen,
        };
        for sample in series {
            let height = bar_height(sample.value, domain);
            columns.push((sample.label.clone(), vec![bar("bar", height, &sample.value.to_string())?]));
        }
    }

    for (label, bars) in columns {
        let column = ElementBuilder::new("div")?
            .class("chart-column")
            .child(ElementBuilder::new("div")?.class("chart-bars").children(bars)?.build())?
            .child(text_el("span", "chart-label", &label)?)?
            .build();
        chart.append_child(&column)?;
    }

    Ok(chart)
}

fn render_overview(state: &AppState, record: &PatientRecord) -> Result<Element, JsValue> {
    let active = state.patient.vital_kind.get();
    let switcher = ElementBuilder::new("div")?.class("subtabs").build();
    for kind in VitalKind::ALL {
        let button = ElementBuilder::new("button")?
            .class("subtab")
            .class_if("active", kind == active)?
            .text(kind.title())
            .build();
        let state = state.clone();
        on_click(&button, move |_| PatientViewModel::new(&state).set_vital_kind(kind))?;
        switcher.append_child(&button)?;
    }

    let vitals = ElementBuilder::new("section")?
        .class("card vitals")
        .child(text_el("h3", "", active.title())?)?
        .child(switcher)?
        .child(render_chart(&record.vitals, active)?)?
        .build();

    let readings = ElementBuilder::new("section")?.class("card readings").build();
    let heading = text_el("h3", "", "Latest Readings")?;
    readings.append_child(&heading)?;
    for (label, value) in record.vitals.latest_readings() {
        let row = fact(label, &value)?;
        readings.append_child(&row)?;
    }

    let conditions = ElementBuilder::new("ul")?.class("conditions").build();
    for condition in &record.current_conditions {
        let item = text_el("li", "", condition)?;
        conditions.append_child(&item)?;
    }

    let medications = ElementBuilder::new("ul")?.class("medication-summary").build();
    for medication in state.patient.medications.borrow().iter() {
        let line = format!("{} {} - {}", medication.name, medication.dosage, medication.frequency);
        let item = text_el("li", "", &line)?;
        medications.append_child(&item)?;
    }

    let side = ElementBuilder::new("section")?
        .class("card")
        .child(text_el("h3", "", "Current Conditions")?)?
        .child(conditions)?
        .child(text_el("h3", "", "Current Medications")?)?
        .child(medications)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("overview")
        .child(vitals)?
        .child(readings)?
        .child(side)?
        .build())
}

// ----------------------------------------------------------------------------
// History
// ----------------------------------------------------------------------------

fn render_history(record: &PatientRecord) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ol")?.class("timeline").build();
    for entry in &record.medical_history {
        let item = ElementBuilder::new("li")?
            .class("timeline-item")
            .child(text_el("span", "timeline-date", &entry.date)?)?
            .child(text_el("strong", "", &entry.condition)?)?
            .child(text_el("span", "", &format!("{} · {}", entry.hospital, entry.doctor))?)?
            .build();
        list.append_child(&item)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("card history")
        .child(text_el("h3", "", "Medical History")?)?
        .child(list)?
        .build())
}

// ----------------------------------------------------------------------------
// Medications
// ----------------------------------------------------------------------------

fn render_medications(state: &AppState) -> Result<Element, JsValue> {
    let table = ElementBuilder::new("table")?.class("table").build();
    let head = ElementBuilder::new("tr")?
        .children(
            ["Medication", "Dosage", "Frequency", "Prescribed", "Doctor"]
                .iter()
                .map(|h| text_el("th", "", h))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();
    table.append_child(&head)?;

    for medication in state.patient.medications.borrow().iter() {
        let cells = [
            &medication.name,
            &medication.dosage,
            &medication.frequency,
            &medication.prescribed,
            &medication.doctor,
        ];
        let row = ElementBuilder::new("tr")?
            .children(cells.iter().map(|c| text_el("td", "", c)).collect::<Result<Vec<_>, _>>()?)?
            .build();
        table.append_child(&row)?;
    }

    let add = text_el("button", "btn-primary", "+ Add Medication")?;
    {
        let state = state.clone();
        on_click(&add, move |_| PatientViewModel::new(&state).set_medication_dialog(true))?;
    }

    let mut section = ElementBuilder::new("section")?
        .class("card medications")
        .child(text_el("h3", "", "Medications")?)?
        .child(add)?
        .child(table)?;

    if state.patient.medication_dialog_open.get() {
        section = section.child(render_medication_dialog(state)?)?;
    }

    Ok(section.build())
}

fn medication_input(
    state: &AppState,
    field: MedicationField,
    label: &str,
    input_type: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let id = format!("medication-{:?}", field).to_lowercase();
    let input = ElementBuilder::new("input")?
        .id(&id)?
        .class("form-input")
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    {
        let state = state.clone();
        on_input(&input, move |value| {
            PatientViewModel::new(&state).set_medication_field(field, &value)
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", &id)?.text(label).build())?
        .child(input)?
        .build())
}

fn render_medication_dialog(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.patient.medication_draft.borrow().clone();

    let cancel = ElementBuilder::new("button")?
        .class("btn-secondary")
        .attr("type", "button")?
        .text("Cancel")
        .build();
    {
        let state = state.clone();
        on_click(&cancel, move |_| PatientViewModel::new(&state).set_medication_dialog(false))?;
    }

    let form = ElementBuilder::new("form")?
        .class("dialog")
        .attr("role", "dialog")?
        .child(text_el("h3", "", "Add Medication")?)?
        .child(medication_input(state, MedicationField::Name, "Medication Name *", "text", &draft.name)?)?
        .child(medication_input(state, MedicationField::Dosage, "Dosage *", "text", &draft.dosage)?)?
        .child(medication_input(state, MedicationField::Frequency, "Frequency *", "text", &draft.frequency)?)?
        .child(medication_input(state, MedicationField::Prescribed, "Prescribed Date", "date", &draft.prescribed)?)?
        .child(medication_input(state, MedicationField::Doctor, "Prescribing Doctor *", "text", &draft.doctor)?)?
        .child(cancel)?
        .child(
            ElementBuilder::new("button")?
                .class("btn-primary")
                .attr("type", "submit")?
                .text("Save Medication")
                .build(),
        )?
        .build();
    {
        let state = state.clone();
        on_submit(&form, move || {
            // Validation failures are shown as toasts
            let _ = PatientViewModel::new(&state).add_medication();
        })?;
    }

    Ok(ElementBuilder::new("div")?.class("overlay").child(form)?.build())
}

// ----------------------------------------------------------------------------
// Documents
// ----------------------------------------------------------------------------

fn render_document(state: &AppState, document: &PatientDocument) -> Result<Element, JsValue> {
    let view = text_el("button", "btn-link", "View")?;
    {
        let state = state.clone();
        let id = document.id.clone();
        on_click(&view, move |_| PatientViewModel::new(&state).view_document(&id))?;
    }

    Ok(ElementBuilder::new("li")?
        .class("document")
        .child(text_el("span", "document-icon", document.kind.icon())?)?
        .child(text_el("span", "document-name", &document.name)?)?
        .child(text_el("span", "document-date", &document.date)?)?
        .child(view)?
        .build())
}

fn render_documents(state: &AppState) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.class("documents").build();
    for document in state.patient.documents.borrow().iter() {
        let item = render_document(state, document)?;
        list.append_child(&item)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("documents-tab")
        .child(
            ElementBuilder::new("section")?
                .class("card")
                .child(text_el("h3", "", "Documents")?)?
                .child(list)?
                .build(),
        )?
        .child(render_upload(state)?)?
        .build())
}

fn render_upload(state: &AppState) -> Result<Element, JsValue> {
    let draft = state.patient.document_draft.borrow().clone();
    let uploading = state.patient.uploading.get();

    let file_input = ElementBuilder::new("input")?
        .id("document-file")?
        .attr("type", "file")?
        .attr("accept", "image/*,application/pdf")?
        .build();
    {
        let state = state.clone();
        on_file_change(&file_input, move |file| PatientViewModel::new(&state).select_file(file))?;
    }

    let name_input = ElementBuilder::new("input")?
        .id("document-name")?
        .class("form-input")
        .attr("type", "text")?
        .attr("placeholder", "Document name")?
        .attr("value", &draft.name)?
        .build();
    {
        let state = state.clone();
        on_input(&name_input, move |value| PatientViewModel::new(&state).set_document_name(&value))?;
    }

    let selected = match &draft.file {
        Some(file) => text_el("p", "selected-file", &format!("{} ({})", file.file_name, file.size_label()))?,
        None => text_el("p", "selected-file", "No file selected")?,
    };

    let form = ElementBuilder::new("form")?
        .class("card upload")
        .child(text_el("h3", "", "Upload Document")?)?
        .child(file_input)?
        .child(selected)?
        .child(name_input)?
        .child(
            ElementBuilder::new("button")?
                .class("btn-primary")
                .attr("type", "submit")?
                .flag("disabled", uploading)?
                .text(if uploading { "Uploading..." } else { "Upload" })
                .build(),
        )?
        .build();
    {
        let state = state.clone();
        on_submit(&form, move || {
            let _ = PatientViewModel::new(&state).upload_document();
        })?;
    }

    Ok(form)
}

fn render_viewer(state: &AppState, document: &PatientDocument) -> Result<Element, JsValue> {
    let close = text_el("button", "btn-secondary", "Close")?;
    {
        let state = state.clone();
        on_click(&close, move |_| PatientViewModel::new(&state).close_viewer())?;
    }

    let size = document
        .size_label()
        .unwrap_or_else(|| "Archived document".to_string());

    let dialog = ElementBuilder::new("div")?
        .class("dialog viewer")
        .attr("role", "dialog")?
        .child(text_el("div", "viewer-icon", document.kind.icon())?)?
        .child(text_el("h3", "", &document.name)?)?
        .child(text_el("p", "", &format!("Uploaded {}", document.date))?)?
        .child(text_el("p", "", &size)?)?
        .child(close)?
        .build();

    Ok(ElementBuilder::new("div")?.class("overlay").child(dialog)?.build())
}
