//! Error types for the food entry library.

use thiserror::Error;

use crate::models::StepId;

/// Error type for wizard and client operations.
///
/// Step-scoped failures the user can recover from (bad input, a backend that
/// said no, a dropped connection) are reported as
/// [`StepFailure`](crate::wizard::StepFailure) values instead; this type is
/// what form validation produces before it is turned into one, and what the
/// wizard returns when it is driven out of order.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A step handler was invoked while another step is displayed
    #[error("Cannot submit step '{requested}' while step '{current}' is displayed")]
    StepNotCurrent { requested: StepId, current: StepId },
    /// HTTP client construction errors
    #[error("HTTP client error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The message to show the user for this error.
    ///
    /// Validation errors carry a ready-made sentence in their reason, so that
    /// is returned as-is; everything else falls back to the full display form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WizardError::invalid_input("name").with_reason("Please enter a food name");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': Please enter a food name"
        );
        assert_eq!(err.user_message(), "Please enter a food name");
    }

    #[test]
    fn test_step_not_current_message() {
        let err = WizardError::StepNotCurrent {
            requested: StepId::Confirmation,
            current: StepId::FoodInfo,
        };
        assert_eq!(
            err.user_message(),
            "Cannot submit step 'Confirmation' while step 'Food Information' is displayed"
        );
    }
}
