use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected status for {endpoint}: expected {expected}, got {actual}")]
    StatusMismatch {
        endpoint: String,
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("Response from {endpoint} has no '{field}' field")]
    MissingField { endpoint: String, field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Network,
    Timeout,
    Assertion,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SmokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmokeError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            SmokeError::HttpError(e) if e.is_decode() => ErrorCategory::Data,
            SmokeError::HttpError(_) => ErrorCategory::Network,
            SmokeError::IoError(_) => ErrorCategory::Network,
            SmokeError::SerializationError(_) => ErrorCategory::Data,
            SmokeError::ConfigValidationError { .. }
            | SmokeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SmokeError::StatusMismatch { .. } => ErrorCategory::Assertion,
            SmokeError::MissingField { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Assertion | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Network | ErrorCategory::Timeout => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::HttpError(e) if e.is_timeout() => {
                "The RegenMed service did not answer before the timeout".to_string()
            }
            SmokeError::HttpError(e) if e.is_connect() => {
                "Could not connect to the RegenMed service".to_string()
            }
            SmokeError::StatusMismatch {
                expected, actual, ..
            } => format!("Expected HTTP {}, but the service answered {}", expected, actual),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check --base-url and that the backend is running",
            ErrorCategory::Timeout => "Raise --timeout or check backend load",
            ErrorCategory::Assertion => "Inspect the printed error body from the service",
            ErrorCategory::Configuration => "Fix the CLI flags or the TOML config file",
            ErrorCategory::Data => "The service returned an unexpected payload shape",
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mismatch_is_assertion() {
        let err = SmokeError::StatusMismatch {
            endpoint: "/api/patients".to_string(),
            expected: 200,
            actual: 500,
            body: String::new(),
        };
        assert_eq!(err.category(), ErrorCategory::Assertion);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("500"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = SmokeError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: "ftp://example.com".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
