// ============================================================================
// DASHBOARD VIEW - Sidebar, today's appointments, patient summary
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_el, ElementBuilder};
use crate::models::{Appointment, AppointmentStatus, PatientSummary};
use crate::state::{AppState, DashboardTab};
use crate::viewmodels::DashboardViewModel;
use crate::views::shared::{render_fingerprint, render_header};

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let dashboard = &state.dashboard;
    if dashboard.loading.get() {
        return Ok(ElementBuilder::new("div")?
            .class("splash")
            .child(render_fingerprint("Loading dashboard...", None)?)?
            .build());
    }

    let clock = text_el("span", "header-clock", &dashboard.clock.borrow())?;
    let header = render_header("Doctor Dashboard", vec![clock])?;

    let main = ElementBuilder::new("main")?
        .class("dashboard-main")
        .child(render_appointments(state)?)?
        .child(render_patient_panel(state)?)?
        .build();

    let content = ElementBuilder::new("div")?
        .class("dashboard-content")
        .child(header)?
        .child(main)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("dashboard")
        .child(render_sidebar(state)?)?
        .child(content)?
        .build())
}

fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let active = state.dashboard.active_tab.get();
    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();

    for tab in DashboardTab::ALL {
        let item = ElementBuilder::new("button")?
            .class("sidebar-item")
            .class_if("active", tab == active)?
            .child(text_el("span", "sidebar-icon", tab.icon())?)?
            .child(text_el("span", "sidebar-label", tab.label())?)?
            .build();
        let state = state.clone();
        on_click(&item, move |_| DashboardViewModel::new(&state).set_tab(tab))?;
        nav.append_child(&item)?;
    }

    let monitor = text_el("button", "sidebar-item sidebar-monitor", "❤️ Health Monitor")?;
    {
        let state = state.clone();
        on_click(&monitor, move |_| DashboardViewModel::new(&state).open_health_monitor())?;
    }

    let logout = text_el("button", "sidebar-item sidebar-logout", "🚪 Logout")?;
    {
        let state = state.clone();
        on_click(&logout, move |_| DashboardViewModel::new(&state).logout())?;
    }

    Ok(ElementBuilder::new("aside")?
        .class("sidebar")
        .child(text_el("div", "sidebar-brand", "🏥 MediSync")?)?
        .child(nav)?
        .child(monitor)?
        .child(logout)?
        .build())
}

fn status_badge(status: AppointmentStatus) -> Result<Element, JsValue> {
    let (class, label) = match status {
        AppointmentStatus::Upcoming => ("badge badge-upcoming", "Upcoming"),
        AppointmentStatus::Completed => ("badge badge-completed", "Completed"),
        AppointmentStatus::Cancelled => ("badge badge-cancelled", "Cancelled"),
    };
    text_el("span", class, label)
}

fn render_appointment(state: &AppState, appointment: &Appointment, selected: bool) -> Result<Element, JsValue> {
    let details = ElementBuilder::new("div")?
        .class("appointment-details")
        .child(text_el("div", "appointment-name", &appointment.name)?)?
        .child(text_el("div", "appointment-reason", &appointment.reason)?)?
        .build();

    let card = ElementBuilder::new("button")?
        .class("appointment-card")
        .class_if("selected", selected)?
        .child(text_el("span", "avatar", &appointment.initial())?)?
        .child(details)?
        .child(text_el("span", "appointment-time", &appointment.time)?)?
        .child(status_badge(appointment.status)?)?
        .build();

    let state = state.clone();
    let id = appointment.id.clone();
    on_click(&card, move |_| DashboardViewModel::new(&state).select_appointment(&id))?;
    Ok(card)
}

fn render_appointments(state: &AppState) -> Result<Element, JsValue> {
    let selected = state.dashboard.selected_id();
    let list = ElementBuilder::new("div")?.class("appointment-list").build();

    for appointment in state.dashboard.appointments.borrow().iter() {
        let is_selected = selected.as_deref() == Some(appointment.id.as_str());
        let item = render_appointment(state, appointment, is_selected)?;
        list.append_child(&item)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("card appointments")
        .child(text_el("h2", "", "Today's Appointments")?)?
        .child(list)?
        .build())
}

fn render_patient_panel(state: &AppState) -> Result<Element, JsValue> {
    let dashboard = &state.dashboard;
    let body = if dashboard.authenticating.get() {
        render_fingerprint("Authenticating Access", None)?
    } else if let Some(patient) = dashboard.current_patient() {
        render_summary(state, &patient)?
    } else {
        text_el("p", "placeholder", "Select an appointment to view patient details")?
    };

    Ok(ElementBuilder::new("section")?
        .class("card patient-panel")
        .child(text_el("h2", "", "Patient Details")?)?
        .child(body)?
        .build())
}

fn fact(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("fact")
        .child(text_el("span", "fact-label", label)?)?
        .child(text_el("span", "fact-value", value)?)?
        .build())
}

fn render_summary(state: &AppState, patient: &PatientSummary) -> Result<Element, JsValue> {
    let opening = state.dashboard.opening_record.get();
    let open = ElementBuilder::new("button")?
        .class("btn-primary")
        .flag("disabled", opening)?
        .text(if opening { "Opening..." } else { "View Complete Records" })
        .build();
    {
        let state = state.clone();
        on_click(&open, move |_| DashboardViewModel::new(&state).open_record())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("patient-summary")
        .child(text_el("h3", "", &patient.name)?)?
        .child(fact("Age", &patient.age.to_string())?)?
        .child(fact("Gender", &patient.gender)?)?
        .child(fact("Blood Type", &patient.blood_type)?)?
        .child(fact("Last Visit", &patient.last_visit)?)?
        .child(fact("Reason", &patient.appointment_reason)?)?
        .child(open)?
        .build())
}
