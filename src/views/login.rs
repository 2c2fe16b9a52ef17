// ============================================================================
// LOGIN VIEW - Credential entry, then location + fingerprint verification
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_input, on_submit, text_el, ElementBuilder};
use crate::models::CREDENTIAL_LEN;
use crate::state::{AppState, LoginPhase};
use crate::viewmodels::AuthSequencer;
use crate::views::shared::render_fingerprint;

pub const CREDENTIAL_INPUT_ID: &str = "aadhaar-input";

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(text_el("div", "login-logo", "🏥")?)?
        .child(text_el("h1", "", "MediSync")?)?
        .child(text_el("p", "", "Secure access to patient records")?)?
        .build();

    let body = match state.login.phase() {
        LoginPhase::CredentialEntry => render_credential_form(state)?,
        LoginPhase::VerifyingLocation | LoginPhase::VerifyingIdentity => {
            render_verification(state)?
        }
    };

    let card = ElementBuilder::new("div")?
        .class("login-container")
        .child(header)?
        .child(body)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(card)?
        .build())
}

fn render_credential_form(state: &AppState) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id(CREDENTIAL_INPUT_ID)?
        .class("form-input")
        .attr("type", "text")?
        .attr("inputmode", "numeric")?
        .attr("autocomplete", "off")?
        .attr("maxlength", &CREDENTIAL_LEN.to_string())?
        .attr("placeholder", "Enter 12-digit Aadhaar number")?
        .attr("value", &state.login.input())?
        .build();
    {
        let state = state.clone();
        on_input(&input, move |value| AuthSequencer::new(&state).set_input(&value))?;
    }

    let mut group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .attr("for", CREDENTIAL_INPUT_ID)?
                .text("Aadhaar Number")
                .build(),
        )?
        .child(input)?;

    if let Some(error) = state.login.error() {
        group = group.child(
            ElementBuilder::new("p")?
                .class("form-error")
                .attr("role", "alert")?
                .text(&error)
                .build(),
        )?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .text("Verify Identity")
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(group.build())?
        .child(submit)?
        .child(text_el(
            "p",
            "login-hint",
            "Your location and fingerprint are verified before access is granted.",
        )?)?
        .build();

    let state = state.clone();
    on_submit(&form, move || {
        if let Err(e) = AuthSequencer::new(&state).submit() {
            log::debug!("🔐 [LOGIN] Submit stopped: {}", e);
        }
    })?;

    Ok(form)
}

fn render_verification(state: &AppState) -> Result<Element, JsValue> {
    let login = &state.login;
    let progress = match login.phase() {
        LoginPhase::VerifyingIdentity => Some(login.progress()),
        _ => None,
    };

    let location_line = if login.location_verified.get() {
        text_el("p", "check check-ok", "📍 Location verified")?
    } else {
        text_el("p", "check check-pending", "📍 Waiting for location...")?
    };

    Ok(ElementBuilder::new("div")?
        .class("verification")
        .child(render_fingerprint(login.status_message(), progress)?)?
        .child(location_line)?
        .build())
}
