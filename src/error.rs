//! Errors that can stop the application before or while the UI runs.

pub use crate::backend::BackendError;
pub use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured backend could not be built.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A global logger was already installed.
    #[error("Logger error: {0}")]
    Logger(String),

    #[error("Failed to create network runtime: {0}")]
    RuntimeCreation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert() {
        let error: AppError = ConfigError::ZeroTimeout.into();
        assert!(matches!(error, AppError::Config(ConfigError::ZeroTimeout)));
        assert_eq!(
            error.to_string(),
            "Configuration error: backend.timeout_ms must be greater than 0"
        );
    }

    #[test]
    fn backend_errors_convert() {
        let error: AppError = BackendError::Rejected("Duplicate enquiry".to_string()).into();
        assert!(matches!(error, AppError::Backend(_)));
        assert!(error.to_string().contains("Duplicate enquiry"));
    }

    #[test]
    fn runtime_error_names_the_runtime() {
        let error = AppError::RuntimeCreation("too many threads".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to create network runtime: too many threads"
        );
    }
}
