use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Every failure the itinerary endpoints can report to a caller.
#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("Missing required fields")]
    Validation,

    #[error("Invalid travel dates")]
    InvalidDates,

    #[error("{0}")]
    InvalidBody(String),

    /// Transport failure, bad status or unreadable content from the completion service.
    #[error("{0}")]
    Upstream(String),

    #[error("Itinerary not found")]
    NotFound,
}

impl From<reqwest::Error> for ItineraryError {
    fn from(err: reqwest::Error) -> Self {
        ItineraryError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for ItineraryError {
    fn from(err: serde_json::Error) -> Self {
        ItineraryError::Upstream(err.to_string())
    }
}

impl ResponseError for ItineraryError {
    fn status_code(&self) -> StatusCode {
        match self {
            ItineraryError::Validation
            | ItineraryError::InvalidDates
            | ItineraryError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ItineraryError::NotFound => StatusCode::NOT_FOUND,
            ItineraryError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            // The upstream message is passed through to the caller as-is.
            ItineraryError::Upstream(message) => json!({
                "success": false,
                "error": "Failed to generate itinerary",
                "message": message,
            }),
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
