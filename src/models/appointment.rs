use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// One slot in today's appointment list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub name: String,
    pub time: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn upcoming(id: &str, name: &str, time: &str, reason: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            time: time.to_string(),
            reason: reason.to_string(),
            status: AppointmentStatus::Upcoming,
        }
    }

    /// First letter of the patient name, for the avatar bubble
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}
