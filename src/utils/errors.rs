// src/utils/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::utils::types::ErrorResponse;

/// Rejections from the activity store.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    DuplicateSignup,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignupError::NotFound        => StatusCode::NOT_FOUND,
            SignupError::DuplicateSignup => StatusCode::BAD_REQUEST,
            SignupError::NotSignedUp     => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Problems with an activity seed file, surfaced at startup.
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("reading seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing seed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
}
