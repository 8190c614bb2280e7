use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::appointments::dto::ApiMessage;

/// Request-level failures. Everything else (malformed JSON, wrong
/// content-type) is rejected by axum's extractors before a handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please provide Patient Name, Doctor Name, date, and time!")]
    MissingFields,
    #[error("Appointment not found!")]
    AppointmentNotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::AppointmentNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiMessage {
            success: false,
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_statuses() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::AppointmentNotFound.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn messages_match_the_api_contract() {
        assert_eq!(
            ApiError::MissingFields.to_string(),
            "Please provide Patient Name, Doctor Name, date, and time!"
        );
        assert_eq!(
            ApiError::AppointmentNotFound.to_string(),
            "Appointment not found!"
        );
    }
}
