//! Wrapper types for displaying groups of wizard values.
//!
//! These wrappers format the step progress indicator and the serving option
//! list with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{ProgressState, ServingOption, ServingOptionValue, StepId};

impl ProgressState {
    /// Indicator icon for the state.
    pub fn icon(&self) -> &'static str {
        match self {
            ProgressState::Completed => "✓",
            ProgressState::Current => "●",
            ProgressState::Upcoming => "○",
        }
    }
}

/// Newtype wrapper for displaying the progress indicator.
///
/// # Examples
///
/// ```rust
/// use foodlog_core::{display::StepProgress, models::{StepId, StepSequence}};
///
/// let mut steps = StepSequence::new();
/// steps.show(StepId::NutritionInfo);
///
/// let output = StepProgress(steps.progress()).to_string();
/// assert_eq!(
///     output,
///     "✓ Food Information → ✓ Serving Size → ● Nutrition Information → ○ Confirmation"
/// );
/// ```
pub struct StepProgress(pub [ProgressState; 4]);

impl StepProgress {
    /// Number of steps marked completed.
    pub fn completed(&self) -> usize {
        self.0
            .iter()
            .filter(|state| **state == ProgressState::Completed)
            .count()
    }
}

impl fmt::Display for StepProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, state)) in StepId::ALL.iter().zip(self.0.iter()).enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{} {id}", state.icon())?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the serving size choices.
///
/// The selected entry is marked; custom entries are listed like any other.
pub struct ServingOptions<'a> {
    options: &'a [ServingOption],
    selected: Option<ServingOptionValue>,
}

impl<'a> ServingOptions<'a> {
    pub fn new(options: &'a [ServingOption], selected: Option<ServingOptionValue>) -> Self {
        Self { options, selected }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Get an iterator over the options.
    pub fn iter(&self) -> std::slice::Iter<'a, ServingOption> {
        self.options.iter()
    }

    /// Position of the selected option, if it is in the list.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.options.iter().position(|option| option.value == selected)
    }
}

impl Index<usize> for ServingOptions<'_> {
    type Output = ServingOption;

    fn index(&self, index: usize) -> &Self::Output {
        &self.options[index]
    }
}

impl<'a> IntoIterator for &ServingOptions<'a> {
    type Item = &'a ServingOption;
    type IntoIter = std::slice::Iter<'a, ServingOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

impl fmt::Display for ServingOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            return writeln!(f, "No serving suggestions.");
        }
        let selected = self.selected_index();
        for (i, option) in self.options.iter().enumerate() {
            let marker = if Some(i) == selected { "●" } else { "○" };
            writeln!(f, "- {marker} {}", option.label)?;
        }
        Ok(())
    }
}
