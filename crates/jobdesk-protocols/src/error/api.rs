//! Scheduler API errors.

use thiserror::Error;

/// Failure talking to the scheduler service.
///
/// Every transport or non-2xx failure lands here. Callers treat all variants the same way:
/// log and leave local state untouched.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_status() {
        let err = ApiError::Status {
            status: 400,
            message: "job id already exists".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_api_error_invalid_response() {
        let err = ApiError::InvalidResponse("expected array".to_string());
        assert!(err.to_string().contains("Invalid response"));
    }

    #[test]
    fn test_api_error_invalid_url() {
        let err = ApiError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("not a url"));
    }
}
