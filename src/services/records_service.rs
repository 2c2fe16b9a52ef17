// ============================================================================
// RECORDS SERVICE - Mock clinical data
// ============================================================================
// Everything here is synthesized from fixed tables. Nothing is fetched and
// nothing is written back.
// ============================================================================

use crate::models::{
    Appointment, BloodPressureSample, DocumentKind, HistoryEntry, Medication, PatientDocument,
    PatientRecord, VitalSample, Vitals,
};

const MONTHS: [&str; 5] = ["Jan", "Feb", "Mar", "Apr", "May"];

/// Today's appointment list
pub fn todays_appointments() -> Vec<Appointment> {
    vec![
        Appointment::upcoming("1", "John Doe", "10:00 AM", "Annual Checkup"),
        Appointment::upcoming("2", "Jane Smith", "11:30 AM", "Follow-up"),
        Appointment::upcoming("3", "Robert Johnson", "1:15 PM", "Vaccination"),
        Appointment::upcoming("4", "Emily Wilson", "2:45 PM", "Blood Test Results"),
        Appointment::upcoming("5", "Michael Brown", "4:00 PM", "Consultation"),
    ]
}

/// Record behind `/patient/:id`. `None` for an empty id.
pub fn patient_record(id: &str) -> Option<PatientRecord> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }

    Some(PatientRecord {
        id: id.to_string(),
        name: "John Doe".to_string(),
        age: 42,
        gender: "Male".to_string(),
        aadhaar_masked: format!("XXXX-XXXX-{:0>4}", id),
        blood_type: "O+".to_string(),
        height: "175 cm".to_string(),
        weight: "78 kg".to_string(),
        bmi: 25.5,
        last_visit: "2 months ago".to_string(),
        is_diabetic: false,
        vitals: vitals(),
        medical_history: vec![
            history("2022-05-15", "City General Hospital", "Influenza", "Dr. Sarah Johnson"),
            history("2021-11-03", "St. Mary's Medical Center", "Sprained Ankle", "Dr. Robert Chen"),
            history("2020-08-22", "County Health Services", "Annual Checkup", "Dr. James Wilson"),
        ],
        documents: vec![
            PatientDocument::new("doc1", "Blood Test Results", "2023-02-15", DocumentKind::Pdf),
            PatientDocument::new("doc2", "Chest X-Ray", "2022-11-20", DocumentKind::Image),
            PatientDocument::new("doc3", "ECG Report", "2022-08-05", DocumentKind::Pdf),
        ],
        current_conditions: vec![
            "Hypertension (mild)".to_string(),
            "Seasonal Allergies".to_string(),
        ],
        medications: vec![
            Medication::new("Lisinopril", "10mg", "Once daily", "2023-01-10", "Dr. Emily Chen"),
            Medication::new("Cetirizine", "5mg", "As needed", "2023-03-15", "Dr. Michael Lee"),
        ],
    })
}

fn vitals() -> Vitals {
    let bp = [(120, 80), (118, 78), (122, 82), (125, 85), (121, 79)];
    Vitals {
        blood_pressure: MONTHS
            .iter()
            .zip(bp)
            .map(|(m, (systolic, diastolic))| BloodPressureSample {
                label: m.to_string(),
                systolic,
                diastolic,
            })
            .collect(),
        weight: series(&[80.0, 79.0, 78.5, 78.0, 78.0]),
        sugar: series(&[98.0, 102.0, 95.0, 100.0, 97.0]),
        oxygen: series(&[97.0, 98.0, 98.0, 99.0, 98.0]),
    }
}

fn series(values: &[f64; 5]) -> Vec<VitalSample> {
    MONTHS
        .iter()
        .zip(values)
        .map(|(m, v)| VitalSample {
            label: m.to_string(),
            value: *v,
        })
        .collect()
}

fn history(date: &str, hospital: &str, condition: &str, doctor: &str) -> HistoryEntry {
    HistoryEntry {
        date: date.to_string(),
        hospital: hospital.to_string(),
        condition: condition.to_string(),
        doctor: doctor.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_upcoming_appointments() {
        let list = todays_appointments();
        assert_eq!(list.len(), 5);
        assert_eq!(list[2].name, "Robert Johnson");
        assert_eq!(list[3].reason, "Blood Test Results");
        assert!(list.iter().all(|a| !a.id.is_empty()));
    }

    #[test]
    fn test_record_is_keyed_by_id() {
        let record = patient_record("7").expect("non-empty id");
        assert_eq!(record.id, "7");
        assert_eq!(record.aadhaar_masked, "XXXX-XXXX-0007");
        assert_eq!(patient_record("12345").unwrap().aadhaar_masked, "XXXX-XXXX-12345");
        assert!(patient_record("  ").is_none());
    }

    #[test]
    fn test_record_is_deterministic() {
        assert_eq!(patient_record("3"), patient_record("3"));
    }

    #[test]
    fn test_latest_readings_of_generated_vitals() {
        let record = patient_record("1").unwrap();
        let readings = record.vitals.latest_readings();
        assert_eq!(readings[0].1, "121/79 mmHg");
        assert_eq!(readings[1].1, "78 kg");
        assert_eq!(readings[2].1, "97 mg/dL");
        assert_eq!(readings[3].1, "98%");
        assert_eq!(record.diabetic_label(), "Non-Diabetic");
    }
}
