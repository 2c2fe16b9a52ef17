use serde::{Deserialize, Serialize};

use crate::error::FormError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// `YYYY-MM-DD`
    pub prescribed: String,
    pub doctor: String,
}

impl Medication {
    pub fn new(name: &str, dosage: &str, frequency: &str, prescribed: &str, doctor: &str) -> Self {
        Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            prescribed: prescribed.to_string(),
            doctor: doctor.to_string(),
        }
    }
}

/// Fields of the "Add Medication" dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MedicationField {
    Name,
    Dosage,
    Frequency,
    Prescribed,
    Doctor,
}

/// Form state of the "Add Medication" dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub prescribed: String,
    pub doctor: String,
}

impl MedicationDraft {
    /// Empty form with the date preset to `today`
    pub fn new(today: &str) -> Self {
        Self {
            prescribed: today.to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: MedicationField, value: &str) {
        let slot = match field {
            MedicationField::Name => &mut self.name,
            MedicationField::Dosage => &mut self.dosage,
            MedicationField::Frequency => &mut self.frequency,
            MedicationField::Prescribed => &mut self.prescribed,
            MedicationField::Doctor => &mut self.doctor,
        };
        *slot = value.to_string();
    }

    /// Name, dosage, frequency and doctor are required; the date is not
    pub fn validate(&self) -> Result<Medication, FormError> {
        let required = [&self.name, &self.dosage, &self.frequency, &self.doctor];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(FormError::MissingMedicationFields);
        }

        Ok(Medication {
            name: self.name.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            frequency: self.frequency.trim().to_string(),
            prescribed: self.prescribed.clone(),
            doctor: self.doctor.trim().to_string(),
        })
    }
}
