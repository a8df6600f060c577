//! Submission backend error types.

/// Errors that can occur while submitting a form.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to deserialize the response body
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Server accepted the request but reported failure
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Successful response without the expected payload
    #[error("Response is missing data for {0}")]
    MissingData(&'static str),

    /// Failure injected by the simulated backend
    #[error("Simulated failure for {0}")]
    Simulated(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let error = BackendError::ApiError {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("503"));
        assert!(error_str.contains("Service unavailable"));

        let error = BackendError::Rejected("Email already registered".to_string());
        assert!(error.to_string().contains("Email already registered"));

        let error = BackendError::MissingData("login");
        assert!(error.to_string().contains("login"));

        let error = BackendError::Simulated("contact");
        assert!(error.to_string().contains("Simulated failure"));
    }

    #[test]
    fn test_backend_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: BackendError = json_error.into();
        assert!(matches!(error, BackendError::Deserialization(_)));
    }
}
