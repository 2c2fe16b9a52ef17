use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// `(key, label, placeholder)` for each input of the health monitor form.
/// Keys are the JSON field names written to storage.
pub const METRIC_FIELDS: [(&str, &str, &str); 12] = [
    ("weight", "Weight (kg)", "Enter weight"),
    ("bodyFat", "Body Fat %", "Enter body fat percentage"),
    ("bmi", "BMI", "Enter BMI"),
    ("visceralFat", "Visceral Fat", "Enter visceral fat"),
    ("metabolicAge", "Metabolic Age", "Enter metabolic age"),
    ("hydration", "Hydration %", "Enter hydration percentage"),
    ("bmr", "BMR (Basal Metabolic Rate)", "Enter BMR"),
    ("proteinPercentage", "Protein %", "Enter protein percentage"),
    ("boneMass", "Bone Mass", "Enter bone mass"),
    ("muscleMass", "Muscle Mass", "Enter muscle mass"),
    ("subcutaneousFat", "Subcutaneous Fat", "Enter subcutaneous fat"),
    ("skeletalMass", "Skeletal Mass", "Enter skeletal mass"),
];

/// Readings typed in from the IoT scale / glucometer. Values are kept as
/// the raw strings the user entered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub weight: String,
    pub body_fat: String,
    pub bmi: String,
    pub visceral_fat: String,
    pub metabolic_age: String,
    pub hydration: String,
    pub bmr: String,
    pub protein_percentage: String,
    pub bone_mass: String,
    pub muscle_mass: String,
    pub subcutaneous_fat: String,
    pub skeletal_mass: String,
}

impl HealthMetrics {
    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        let slot = match key {
            "weight" => &mut self.weight,
            "bodyFat" => &mut self.body_fat,
            "bmi" => &mut self.bmi,
            "visceralFat" => &mut self.visceral_fat,
            "metabolicAge" => &mut self.metabolic_age,
            "hydration" => &mut self.hydration,
            "bmr" => &mut self.bmr,
            "proteinPercentage" => &mut self.protein_percentage,
            "boneMass" => &mut self.bone_mass,
            "muscleMass" => &mut self.muscle_mass,
            "subcutaneousFat" => &mut self.subcutaneous_fat,
            "skeletalMass" => &mut self.skeletal_mass,
            _ => return None,
        };
        Some(slot)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let slot = self
            .slot_mut(key)
            .ok_or_else(|| FormError::UnknownMetric(key.to_string()))?;
        *slot = value.to_string();
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "weight" => &self.weight,
            "bodyFat" => &self.body_fat,
            "bmi" => &self.bmi,
            "visceralFat" => &self.visceral_fat,
            "metabolicAge" => &self.metabolic_age,
            "hydration" => &self.hydration,
            "bmr" => &self.bmr,
            "proteinPercentage" => &self.protein_percentage,
            "boneMass" => &self.bone_mass,
            "muscleMass" => &self.muscle_mass,
            "subcutaneousFat" => &self.subcutaneous_fat,
            "skeletalMass" => &self.skeletal_mass,
            _ => return None,
        };
        Some(value.as_str())
    }
}
