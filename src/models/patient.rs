use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::document::PatientDocument;
use super::medication::Medication;

/// Short card shown on the dashboard once an appointment is opened
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub blood_type: String,
    pub last_visit: String,
    pub appointment_reason: String,
}

impl PatientSummary {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let reason = if appointment.reason.is_empty() {
            "Check-up".to_string()
        } else {
            appointment.reason.clone()
        };

        Self {
            id: appointment.id.clone(),
            name: appointment.name.clone(),
            age: 42,
            gender: "Male".to_string(),
            blood_type: "O+".to_string(),
            last_visit: "2 months ago".to_string(),
            appointment_reason: reason,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureSample {
    pub label: String,
    pub systolic: u16,
    pub diastolic: u16,
}

/// Which vitals series is being looked at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VitalKind {
    #[default]
    BloodPressure,
    Weight,
    Sugar,
    Oxygen,
}

impl VitalKind {
    pub const ALL: [VitalKind; 4] = [
        VitalKind::BloodPressure,
        VitalKind::Weight,
        VitalKind::Sugar,
        VitalKind::Oxygen,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            VitalKind::BloodPressure => "Blood Pressure",
            VitalKind::Weight => "Weight",
            VitalKind::Sugar => "Blood Sugar",
            VitalKind::Oxygen => "Oxygen Levels",
        }
    }

    pub fn series_name(&self) -> &'static str {
        match self {
            VitalKind::BloodPressure => "Systolic / Diastolic",
            VitalKind::Weight => "Weight (kg)",
            VitalKind::Sugar => "Blood Sugar (mg/dL)",
            VitalKind::Oxygen => "Oxygen Level (%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub blood_pressure: Vec<BloodPressureSample>,
    pub weight: Vec<VitalSample>,
    pub sugar: Vec<VitalSample>,
    pub oxygen: Vec<VitalSample>,
}

impl Vitals {
    /// `(min, max)` for the y axis of a series
    pub fn axis_domain(&self, kind: VitalKind) -> Option<(f64, f64)> {
        match kind {
            VitalKind::Oxygen => Some((90.0, 100.0)),
            VitalKind::Weight => min_max(self.weight.iter().map(|s| s.value))
                .map(|(min, max)| (min - 5.0, max + 5.0)),
            VitalKind::Sugar => min_max(self.sugar.iter().map(|s| s.value)),
            VitalKind::BloodPressure => min_max(
                self.blood_pressure
                    .iter()
                    .flat_map(|s| [f64::from(s.systolic), f64::from(s.diastolic)]),
            ),
        }
    }

    /// Last sample of each series, formatted for the "Latest Readings" card
    pub fn latest_readings(&self) -> Vec<(&'static str, String)> {
        let mut readings = Vec::with_capacity(4);
        if let Some(bp) = self.blood_pressure.last() {
            readings.push(("Blood Pressure", format!("{}/{} mmHg", bp.systolic, bp.diastolic)));
        }
        if let Some(w) = self.weight.last() {
            readings.push(("Weight", format!("{} kg", w.value)));
        }
        if let Some(s) = self.sugar.last() {
            readings.push(("Blood Sugar", format!("{} mg/dL", s.value)));
        }
        if let Some(o) = self.oxygen.last() {
            readings.push(("Oxygen Level", format!("{}%", o.value)));
        }
        readings
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub hospital: String,
    pub condition: String,
    pub doctor: String,
}

/// Full record behind `/patient/:id`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub aadhaar_masked: String,
    pub blood_type: String,
    pub height: String,
    pub weight: String,
    pub bmi: f64,
    pub last_visit: String,
    pub is_diabetic: bool,
    pub vitals: Vitals,
    pub medical_history: Vec<HistoryEntry>,
    pub documents: Vec<PatientDocument>,
    pub current_conditions: Vec<String>,
    pub medications: Vec<Medication>,
}

impl PatientRecord {
    pub fn diabetic_label(&self) -> &'static str {
        if self.is_diabetic {
            "Diabetic"
        } else {
            "Non-Diabetic"
        }
    }
}
