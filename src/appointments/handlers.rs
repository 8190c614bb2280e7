use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{ApiMessage, AppointmentData, AppointmentList, CreateAppointment};

// --- public routers ---

pub fn read_router() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments))
        .route("/appointments/:id", get(get_appointment))
}

pub fn write_router() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment))
        .route("/appointments/:id", delete(delete_appointment))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_appointments(State(state): State<AppState>) -> Json<AppointmentList> {
    let store = state.store.lock().await;
    let data = store.list().to_vec();
    Json(AppointmentList {
        success: true,
        count: data.len(),
        data,
    })
}

#[instrument(skip(state, body))]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<CreateAppointment>,
) -> Result<(StatusCode, Json<AppointmentData>), ApiError> {
    let fields = body.into_fields().ok_or(ApiError::MissingFields)?;
    let mut store = state.store.lock().await;
    let appointment = store.create(fields);
    tracing::debug!(id = appointment.id, "appointment created");
    Ok((
        StatusCode::CREATED,
        Json(AppointmentData {
            success: true,
            data: appointment,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AppointmentData>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::AppointmentNotFound)?;
    let store = state.store.lock().await;
    let appointment = store
        .find_by_id(id)
        .cloned()
        .ok_or(ApiError::AppointmentNotFound)?;
    Ok(Json(AppointmentData {
        success: true,
        data: appointment,
    }))
}

#[instrument(skip(state))]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::AppointmentNotFound)?;
    let mut store = state.store.lock().await;
    if !store.delete_by_id(id) {
        return Err(ApiError::AppointmentNotFound);
    }
    tracing::debug!(id, "appointment deleted");
    Ok(Json(ApiMessage {
        success: true,
        message: "Appointment deleted successfully!".into(),
    }))
}

/// A non-numeric id can never match a stored appointment, so it falls through
/// to the 404 path rather than a router-level 400.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}
