//! Error types for expensetracker-core
//!
//! Every model error carries a stable code, a severity and a detail record
//! that a controller can turn into a user-facing validation message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Rejected input, no state was changed
    InvalidArgument,
    /// A listener failed while being notified
    ListenerFailed,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorCode::ListenerFailed => write!(f, "LISTENER_FAILED"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - the request was refused, the model is unchanged
    Warning,
    /// Error - an observer could not process a state change
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Detailed error information for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Main error type for expensetracker-core
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Listener failed: {source}")]
    Listener {
        #[source]
        source: anyhow::Error,
    },
}

impl ModelError {
    /// Shorthand for an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            ModelError::Listener { .. } => ErrorCode::ListenerFailed,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ModelError::InvalidArgument { .. } => ErrorSeverity::Warning,
            ModelError::Listener { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            ModelError::InvalidArgument { message } => {
                details = details.with_detail(serde_json::json!({ "validation_message": message }));
                details = details.with_suggestion(
                    "Correct the input and try again; nothing was changed.".to_string(),
                );
            }
            ModelError::Listener { source } => {
                let chain: Vec<String> = source.chain().map(|cause| cause.to_string()).collect();
                details = details.with_detail(serde_json::json!({ "causes": chain }));
                details = details.with_suggestion(
                    "Listeners registered after the failing one were not notified.".to_string(),
                );
                details = details.with_suggestion(
                    "Call notify_observers() once the listener has been fixed.".to_string(),
                );
            }
        }

        details
    }
}

/// Result type with ModelError
pub type ModelResult<T> = Result<T, ModelError>;

// ==================== Tests ====================
