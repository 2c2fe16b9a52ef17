// ============================================================================
// HEALTH MONITOR VIEW - Body composition readings form
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, on_input, on_submit, text_el, ElementBuilder};
use crate::models::METRIC_FIELDS;
use crate::state::AppState;
use crate::viewmodels::HealthMonitorViewModel;
use crate::views::shared::render_header;

pub fn render_health_monitor(state: &AppState) -> Result<Element, JsValue> {
    let back = text_el("button", "btn-secondary", "← Back to Dashboard")?;
    {
        let state = state.clone();
        on_click(&back, move |_| HealthMonitorViewModel::new(&state).back_to_dashboard())?;
    }
    let header = render_header("Health Monitor", vec![back])?;

    let grid = ElementBuilder::new("div")?.class("metrics-grid").build();
    let metrics = state.health.metrics.get();

    for (key, label, placeholder) in METRIC_FIELDS {
        let id = format!("metric-{}", key);
        let input = ElementBuilder::new("input")?
            .id(&id)?
            .class("form-input")
            .attr("type", "text")?
            .attr("inputmode", "decimal")?
            .attr("placeholder", placeholder)?
            .attr("value", metrics.get(key).unwrap_or_default())?
            .build();
        {
            let state = state.clone();
            on_input(&input, move |value| {
                if let Err(e) = HealthMonitorViewModel::new(&state).set_field(key, &value) {
                    log::warn!("⚠️ [HEALTH] {}", e);
                }
            })?;
        }

        let group = ElementBuilder::new("div")?
            .class("form-group")
            .child(ElementBuilder::new("label")?.attr("for", &id)?.text(label).build())?
            .child(input)?
            .build();
        grid.append_child(&group)?;
    }

    let form = ElementBuilder::new("form")?
        .class("card metrics-form")
        .child(text_el("h2", "", "Enter Readings")?)?
        .child(text_el(
            "p",
            "form-hint",
            "Values from your smart scale or glucometer. All fields are optional.",
        )?)?
        .child(grid)?
        .child(
            ElementBuilder::new("button")?
                .class("btn-primary")
                .attr("type", "submit")?
                .text("Save Metrics")
                .build(),
        )?
        .build();
    {
        let state = state.clone();
        on_submit(&form, move || {
            // Failure already surfaced as a toast
            let _ = HealthMonitorViewModel::new(&state).save();
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("page health-monitor")
        .child(header)?
        .child(form)?
        .build())
}
