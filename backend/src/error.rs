use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::Message;
use log::error;
use thiserror::Error;

/// Every failure the API can report, mapped onto the status class the
/// frontend expects: 400 for upload validation (missing file, unknown
/// extension, empty roster), 401/403 for the access gate, 500 for anything
/// unexpected, including a file that cannot be decoded.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("File missing")]
    MissingFile,
    #[error("Invalid file type")]
    UnsupportedExtension,
    #[error("No agents found")]
    NoAgentsAvailable,
    #[error("Unrecognized file format: {0}")]
    UnsupportedFormat(String),
    #[error("Could not read the uploaded file: {0}")]
    MalformedInput(String),
    #[error("No agents to distribute to")]
    EmptyRoster,
    #[error("No token provided")]
    Unauthorized,
    #[error("Invalid token")]
    Forbidden,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile
            | ApiError::UnsupportedExtension
            | ApiError::NoAgentsAvailable
            | ApiError::EmptyRoster => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::UnsupportedFormat(_)
            | ApiError::MalformedInput(_)
            | ApiError::Database(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Server-side failures are logged in full but reported generically,
        // so database details never leak into a response body.
        let message = if status.is_server_error() {
            error!("{}", self);
            Message::new("Server error")
        } else {
            Message::new(self.to_string())
        };
        HttpResponse::build(status).json(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_validation_failures_are_client_errors() {
        for err in [
            ApiError::MissingFile,
            ApiError::UnsupportedExtension,
            ApiError::NoAgentsAvailable,
            ApiError::EmptyRoster,
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn undecodable_uploads_are_server_errors() {
        assert_eq!(
            ApiError::MalformedInput("ragged row".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UnsupportedFormat("not a workbook".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn access_gate_failures_keep_their_split() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }
}
