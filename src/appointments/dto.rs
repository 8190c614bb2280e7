use serde::{Deserialize, Serialize};

use super::store::{Appointment, NewAppointment};

/// POST /appointments body. Every field is optional at the wire level so the
/// handler can answer missing fields with the API's own 400 envelope instead
/// of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointment {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl CreateAppointment {
    /// Empty strings count as missing, same as absent fields.
    pub fn into_fields(self) -> Option<NewAppointment> {
        Some(NewAppointment {
            patient_name: non_empty(self.patient_name)?,
            doctor_name: non_empty(self.doctor_name)?,
            date: non_empty(self.date)?,
            time: non_empty(self.time)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AppointmentList {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Appointment>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentData {
    pub success: bool,
    pub data: Appointment,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_payload_yields_fields() {
        let body: CreateAppointment = serde_json::from_value(serde_json::json!({
            "patientName": "John Doe",
            "doctorName": "Dr. Smith",
            "date": "2024-01-15",
            "time": "10:00 AM"
        }))
        .unwrap();
        let fields = body.into_fields().unwrap();
        assert_eq!(fields.patient_name, "John Doe");
        assert_eq!(fields.time, "10:00 AM");
    }

    #[test]
    fn absent_field_rejects() {
        let body: CreateAppointment =
            serde_json::from_value(serde_json::json!({ "patientName": "John Doe" })).unwrap();
        assert!(body.into_fields().is_none());
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let body: CreateAppointment = serde_json::from_value(serde_json::json!({
            "patientName": "John Doe",
            "doctorName": "Dr. Smith",
            "date": "",
            "time": "10:00 AM"
        }))
        .unwrap();
        assert!(body.into_fields().is_none());
    }
}
