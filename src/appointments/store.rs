use serde::Serialize;
use time::OffsetDateTime;

/// A scheduled meeting between a patient and a doctor. Immutable after
/// creation; there is no update endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Validated creation fields, produced by the handler layer.
#[derive(Debug)]
pub struct NewAppointment {
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
}

/// In-memory holder of all appointments plus the id counter. Ids start at 1
/// and only ever advance, so deleted ids are never reissued.
#[derive(Debug)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, fields: NewAppointment) -> Appointment {
        let appointment = Appointment {
            id: self.next_id,
            patient_name: fields.patient_name,
            doctor_name: fields.doctor_name,
            date: fields.date,
            time: fields.time,
            status: "scheduled".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.next_id += 1;
        self.appointments.push(appointment.clone());
        appointment
    }

    /// All appointments in insertion order.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Removes the matching appointment, preserving the order of the rest.
    /// Returns false (store untouched) when the id is unknown.
    pub fn delete_by_id(&mut self, id: u64) -> bool {
        match self.appointments.iter().position(|a| a.id == id) {
            Some(index) => {
                self.appointments.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}
