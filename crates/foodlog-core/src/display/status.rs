//! Status messages for step feedback.

use std::fmt;

use crate::models::StepId;

/// Wrapper type for displaying a step's success or error message.
///
/// This provides consistent formatting for the feedback shown after a step
/// is submitted.
pub struct OperationStatus {
    pub step: Option<StepId>,
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            step: None,
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            step: None,
            message: message.into(),
            success: false,
        }
    }

    /// Attribute the status to a step.
    pub fn for_step(mut self, step: StepId) -> Self {
        self.step = Some(step);
        self
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        match self.step {
            Some(step) => writeln!(f, "{label} {} ({step})", self.message),
            None => writeln!(f, "{label} {}", self.message),
        }
    }
}
